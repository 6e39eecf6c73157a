//! Blocking archive download.
use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use log::{debug, info};
use reqwest::Url;

use crate::error::Error;

/// file name used when the url has no usable path segment.
const FALLBACK_NAME: &str = "download";

/// Local file name for `url`: its last non-empty path segment.
pub fn file_name(url: &Url) -> String {
    url.path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .map(String::from)
        .unwrap_or_else(|| FALLBACK_NAME.to_string())
}

/// attempt to download from `url`, storing the result in `folder`/<file name>.
///
/// No retry nor resume is attempted. Non-success statuses are errors.
pub fn download_from(url: &str, folder: &Path) -> Result<PathBuf, Error> {
    let url = Url::parse(url)?;
    let path = folder.join(file_name(&url));

    //fire blocking request, create out file,
    //stream the body into the file.
    info!("downloading {} to {:?}", url, path);
    let client = reqwest::blocking::Client::new();
    let response = client.get(url).send()?.error_for_status()?;
    let mut out = File::create(&path)?;
    let mut buf = BufReader::new(response);
    let size = std::io::copy(&mut buf, &mut out)?;
    debug!("wrote {} bytes to {:?}", size, path);

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_from_url() {
        let url = Url::parse(
            "https://github.com/nuhaalbadi/Arabic_hatespeech/archive/refs/heads/master.zip",
        )
        .unwrap();
        assert_eq!(file_name(&url), "master.zip");

        let url = Url::parse("https://ndownloader.figshare.com/articles/4267550/versions/5/")
            .unwrap();
        assert_eq!(file_name(&url), "5");

        let url = Url::parse("http://example.com").unwrap();
        assert_eq!(file_name(&url), FALLBACK_NAME);
    }

    #[test]
    fn invalid_url() {
        let dir = tempfile::tempdir().unwrap();
        let res = download_from("not a url", dir.path());
        assert!(matches!(res, Err(Error::Url(_))));
    }
}
