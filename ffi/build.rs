use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=src");

    let crate_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => return,
    };
    let include_dir = crate_dir.join("include");
    if let Err(e) = fs::create_dir_all(&include_dir) {
        println!("cargo:warning=cannot create {}: {e}", include_dir.display());
        return;
    }

    // Header generation is best-effort; the library itself does not need it.
    match cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_language(cbindgen::Language::C)
        .with_include_guard("REQLINE_H")
        .generate()
    {
        Ok(bindings) => {
            bindings.write_to_file(include_dir.join("reqline.h"));
        }
        Err(e) => println!("cargo:warning=cbindgen: {e}"),
    }
}
