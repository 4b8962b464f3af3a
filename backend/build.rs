use std::fs;
use std::path::Path;

const PLACEHOLDER: &str = "<!DOCTYPE html>\n<html lang=\"id\"><head><meta charset=\"utf-8\"><title>SIAP LAPOR</title></head>\n<body><p>Frontend belum dibangun. Jalankan <code>trunk build --release</code> di folder frontend.</p></body></html>\n";

fn main() {
    let out_dir = Path::new("static");
    let dist_dir = Path::new("../frontend/dist");
    let embedded = out_dir.join("dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(out_dir);
        fs::create_dir_all(out_dir).unwrap();
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).copy_inside(true),
        )
        .unwrap();
    }

    // include_dir! needs the folder even before the first frontend build.
    if !embedded.join("index.html").exists() {
        fs::create_dir_all(&embedded).unwrap();
        fs::write(embedded.join("index.html"), PLACEHOLDER).unwrap();
    }

    println!("cargo:rerun-if-changed=../frontend/dist");
}
