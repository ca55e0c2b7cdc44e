#[cfg(test)]
mod tests {
    use h264_reformat::av::{MediaFormat, Packet};
    use h264_reformat::codec::h264::{
        convert_to_es, convert_to_format, decode_nalu_byte, encode_nalu_byte, find_nalu_start,
        is_start_code3, is_start_code4, nalu_length_size, remove_header, resolve_format,
        NaluContent, NaluPriority,
    };
    use h264_reformat::config::Config;
    use h264_reformat::error::{ReformatError, Result};
    use h264_reformat::utils::ByteBuffer;
    use pretty_assertions::assert_eq;
    use quickcheck_macros::quickcheck;

    const SPS: [u8; 10] = [0x67, 0x42, 0xC0, 0x1E, 0xD9, 0x00, 0xA0, 0x47, 0xFE, 0xC8];
    const PPS: [u8; 4] = [0x68, 0xCE, 0x3C, 0x80];
    const IDR: [u8; 8] = [0x65, 0x88, 0x84, 0x00, 0x33, 0xFF, 0xFE, 0xF6];

    /// SPS, PPS and IDR slice as one Annex-B access unit
    fn annexb_access_unit() -> Vec<u8> {
        let mut data = Vec::new();
        for nal in [&SPS[..], &PPS[..], &IDR[..]] {
            data.extend_from_slice(&[0x00, 0x00, 0x00, 0x01]);
            data.extend_from_slice(nal);
        }
        data
    }

    fn avcc32(chunks: &[&[u8]]) -> Vec<u8> {
        let mut data = Vec::new();
        for chunk in chunks {
            data.extend_from_slice(&(chunk.len() as u32).to_be_bytes());
            data.extend_from_slice(chunk);
        }
        data
    }

    #[test]
    fn test_classifier_round_trip() {
        let priorities = [
            NaluPriority::Zero,
            NaluPriority::One,
            NaluPriority::Two,
            NaluPriority::Important,
        ];
        for content in 0..32u8 {
            for priority in priorities {
                let content = NaluContent::from(content);
                let byte = encode_nalu_byte(content, priority);
                assert_eq!(decode_nalu_byte(byte).unwrap(), (content, priority));
            }
        }
        for byte in 0x80..=0xFFu8 {
            assert!(matches!(
                decode_nalu_byte(byte),
                Err(ReformatError::ZeroBitViolation { .. })
            ));
        }
    }

    #[test]
    fn test_start_code_examples() {
        assert!(is_start_code3(&[0x00, 0x00, 0x01, 0x67]));
        assert!(!is_start_code3(&[0x00, 0x00, 0x01, 0xE7]));
        assert!(is_start_code4(&[0x00, 0x00, 0x00, 0x01, 0x67]));

        let data = annexb_access_unit();
        let first = find_nalu_start(&data).unwrap();
        assert_eq!((first.offset, first.len), (0, 4));
        let second = find_nalu_start(&data[first.header_offset()..]).unwrap();
        assert_eq!(second.offset + first.header_offset(), 4 + SPS.len());
    }

    #[test]
    fn test_length_sizes() {
        assert_eq!(nalu_length_size(MediaFormat::H264Avcc32).unwrap(), 4);
        assert_eq!(nalu_length_size(MediaFormat::H264Es).unwrap(), 0);
        assert!(nalu_length_size(MediaFormat::Opus).is_err());
    }

    #[test]
    fn test_avcc_to_annexb_end_to_end() -> Result<()> {
        let mut format = MediaFormat::H264Avcc32;
        let mut data = ByteBuffer::from(vec![
            0x00, 0x00, 0x00, 0x02, 0xAA, 0xBB, 0x00, 0x00, 0x00, 0x01, 0xCC,
        ]);
        convert_to_format(&mut format, MediaFormat::H264Es, &mut data, &Config::default())?;

        assert_eq!(format, MediaFormat::H264Es);
        assert_eq!(
            &data[..],
            &[
                0x00, 0x00, 0x00, 0x01, 0x09, 0xF0, 0xAA, 0xBB, //
                0x00, 0x00, 0x00, 0x01, 0x09, 0xF0, 0xCC,
            ]
        );
        Ok(())
    }

    #[test]
    fn test_access_unit_to_avcc_and_back() -> Result<()> {
        let config = Config {
            keep_nal_header: true,
            ..Config::default()
        };
        let mut packet = Packet::new(annexb_access_unit(), MediaFormat::H264Es)
            .with_pts(90_000)
            .with_key_flag(true);

        packet.convert_to(MediaFormat::H264Avcc32, &config)?;
        assert_eq!(packet.format, MediaFormat::H264Avcc32);
        assert_eq!(&packet.data[..], &avcc32(&[&SPS[..], &PPS[..], &IDR[..]])[..]);

        // Annex-B output introduces every unit with an AUD; headers kept by
        // the previous step travel as payload.
        packet.convert_to(MediaFormat::H264Es, &config)?;
        assert_eq!(packet.format, MediaFormat::H264Es);
        let mut expected = Vec::new();
        for nal in [&SPS[..], &PPS[..], &IDR[..]] {
            expected.extend_from_slice(&[0x00, 0x00, 0x00, 0x01, 0x09, 0xF0]);
            expected.extend_from_slice(nal);
        }
        assert_eq!(&packet.data[..], &expected[..]);
        assert_eq!(packet.pts, Some(90_000));
        Ok(())
    }

    #[test]
    fn test_access_unit_to_avcc_drops_headers_by_default() -> Result<()> {
        let mut format = MediaFormat::H264Es;
        let mut data = ByteBuffer::from(annexb_access_unit());
        convert_to_format(&mut format, MediaFormat::H264Avcc16, &mut data, &Config::default())?;

        let mut expected = Vec::new();
        for nal in [&SPS[..], &PPS[..], &IDR[..]] {
            expected.extend_from_slice(&((nal.len() - 1) as u16).to_be_bytes());
            expected.extend_from_slice(&nal[1..]);
        }
        assert_eq!(format, MediaFormat::H264Avcc16);
        assert_eq!(&data[..], &expected[..]);
        Ok(())
    }

    #[test]
    fn test_resolve_and_strip_for_platform_decoder() -> Result<()> {
        let mut sps = Vec::from([0x00, 0x00, 0x00, 0x01]);
        sps.extend_from_slice(&SPS);
        assert_eq!(resolve_format(&sps)?, Some(MediaFormat::H264SpsEs));

        let mut format = MediaFormat::H264Es;
        let mut data = ByteBuffer::from(sps.clone());
        convert_to_es(&mut format, &mut data, &Config::default())?;
        assert_eq!(format, MediaFormat::H264SpsEs);

        let config = Config::default();
        remove_header(format, &mut data, config.strip_nal_byte)?;
        assert_eq!(&data[..], &SPS[..]);

        let config = Config::parse("strip_nal_byte = true");
        let mut data = ByteBuffer::from(sps);
        remove_header(format, &mut data, config.strip_nal_byte)?;
        assert_eq!(&data[..], &SPS[1..]);
        Ok(())
    }

    #[test]
    fn test_failures_are_reported() {
        let config = Config::default();

        let mut format = MediaFormat::H264Avcc32;
        let mut data = ByteBuffer::from(vec![0x00, 0x00, 0x00, 0x01, 0x65]);
        let err = convert_to_format(&mut format, MediaFormat::H264Es, &mut data, &config)
            .unwrap_err();
        assert!(matches!(err, ReformatError::MalformedHeader { .. }));

        let mut format = MediaFormat::H264Avcc16;
        let mut data = ByteBuffer::from(vec![0x00, 0x02, 0xAA, 0xBB, 0x7F, 0xFF, 0xCC]);
        let err = convert_to_format(&mut format, MediaFormat::H264Es, &mut data, &config)
            .unwrap_err();
        assert!(matches!(
            err,
            ReformatError::ChunkOverrun {
                length: 0x7FFF,
                remaining: 1,
                ..
            }
        ));
        assert!(err.to_string().contains("H264Avcc16"));
        assert_eq!(format, MediaFormat::H264Avcc16);
    }

    #[quickcheck]
    fn prop_avcc_annexb_avcc_preserves_payloads(chunks: Vec<Vec<u8>>, keep: bool) -> bool {
        // Payloads without zero bytes cannot contain a start code
        let chunks: Vec<Vec<u8>> = chunks
            .into_iter()
            .filter(|c| !c.is_empty())
            .map(|c| c.into_iter().take(300).map(|b| b.max(1)).collect())
            .collect();
        let refs: Vec<&[u8]> = chunks.iter().map(|c| &c[..]).collect();
        let original = avcc32(&refs);
        if original.len() < 6 {
            return true;
        }

        let config = Config {
            keep_nal_header: keep,
            ..Config::default()
        };
        let mut format = MediaFormat::H264Avcc32;
        let mut data = ByteBuffer::from(original.clone());
        if convert_to_format(&mut format, MediaFormat::H264Es, &mut data, &config).is_err() {
            return false;
        }
        if convert_to_format(&mut format, MediaFormat::H264Avcc32, &mut data, &config).is_err() {
            return false;
        }
        format == MediaFormat::H264Avcc32 && data[..] == original[..]
    }
}
