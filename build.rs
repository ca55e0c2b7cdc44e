use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Create config template next to the build output
    let out_dir = env::var("OUT_DIR").unwrap_or_else(|_| "./".to_string());
    let template_path = Path::new(&out_dir).join("../../../h264_reformat.template.toml");

    let template = r#"# h264-reformat configuration template
# Copy this file to 'h264_reformat.toml' and adjust the values

# remove_header also drops the NAL header byte after a start code
strip_nal_byte = false

# Annex-B to AVCC conversion keeps each NAL header byte in the payload
keep_nal_header = false
"#;

    let _ = fs::write(template_path, template);
    println!("cargo:rerun-if-changed=build.rs");
}
