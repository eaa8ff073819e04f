use flate2::Compression;
use flate2::write::GzEncoder;

const WRAPPER: &str = "mosaia-tools-starter-main";

/// Gzip tarball with every file under a `mosaia-tools-starter-main/` wrapper.
///
/// Same shape as a codeload export: a directory entry for the wrapper, then
/// the files beneath it.
pub fn starter_archive(files: &[(&str, &str)]) -> Vec<u8> {
    let encoder = GzEncoder::new(Vec::new(), Compression::default());
    let mut builder = tar::Builder::new(encoder);

    let mut dir = tar::Header::new_gnu();
    dir.set_entry_type(tar::EntryType::Directory);
    dir.set_mode(0o755);
    dir.set_size(0);
    builder
        .append_data(&mut dir, format!("{}/", WRAPPER), std::io::empty())
        .expect("append wrapper directory to in-memory archive");

    for (name, content) in files {
        let mut header = tar::Header::new_gnu();
        header.set_mode(0o644);
        header.set_size(content.len() as u64);
        builder
            .append_data(&mut header, format!("{}/{}", WRAPPER, name), content.as_bytes())
            .expect("append entry to in-memory archive");
    }

    builder
        .into_inner()
        .and_then(|encoder| encoder.finish())
        .expect("finish in-memory archive")
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;

    #[test]
    fn wrapper_directory_comes_first() {
        let bytes = starter_archive(&[(".mosaia", "{}")]);
        let mut archive = tar::Archive::new(GzDecoder::new(bytes.as_slice()));
        let paths: Vec<(String, bool)> = archive
            .entries()
            .unwrap()
            .map(|entry| {
                let entry = entry.unwrap();
                let is_dir = entry.header().entry_type().is_dir();
                let path = entry.path().unwrap().display().to_string();
                (path.trim_end_matches('/').to_string(), is_dir)
            })
            .collect();

        assert_eq!(
            paths,
            vec![
                ("mosaia-tools-starter-main".to_string(), true),
                ("mosaia-tools-starter-main/.mosaia".to_string(), false),
            ]
        );
    }
}
