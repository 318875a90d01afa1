// crates/fuzzygeo-core/src/loader/common_io.rs
use crate::error::{GeoError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Opens a file, buffers it, and wraps it in a Gzip decoder when
/// `gzip` is set. The caller doesn't care about the compression after that.
pub fn open_stream(path: &Path, gzip: bool) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        GeoError::NotFound(format!("Gazetteer not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if !gzip {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        use flate2::read::GzDecoder;
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(GeoError::UnsupportedFormat(format!(
            "{}: gzip input requires the 'compact' feature",
            path.display()
        )))
    }
}
