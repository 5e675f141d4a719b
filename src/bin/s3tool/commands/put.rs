// Put command implementation

use anyhow::{anyhow, Result};
use std::path::Path;

use crate::cli::PutArgs;
use s3tool::oss::{ObjectStore, PutOptions};

/// Execute the put command
///
/// Transfers exactly one local file to the destination key, overwriting any
/// existing object. Failures are reported on stderr and do not abort the run.
pub async fn execute_put(args: &PutArgs, store: &dyn ObjectStore, bucket: &str) -> Result<()> {
    let key = resolve_dest_key(&args.key, &args.source)?;

    let options = PutOptions {
        content_type: args.content_type.clone(),
        ..Default::default()
    };

    match store.put_file(&key, Path::new(&args.source), options).await {
        Ok(()) => {
            println!("Uploaded: {} -> s3://{}/{}", args.source, bucket, key);
        }
        Err(e) if e.is_backend() => {
            eprintln!("Upload failed: {} -> s3://{}/{}: {}", args.source, bucket, key, e);
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

/// Resolve the destination key
///
/// A trailing '/' acts as a directory-like prefix and gets the source file
/// name appended. An empty key is a usage error.
fn resolve_dest_key(key: &str, source: &str) -> Result<String> {
    if key.is_empty() {
        return Err(anyhow!("Destination key must not be empty"));
    }

    if key.ends_with('/') {
        let name = Path::new(source)
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| anyhow!("Cannot derive a file name from source path: {}", source))?;
        return Ok(format!("{}{}", key, name));
    }

    Ok(key.to_string())
}
