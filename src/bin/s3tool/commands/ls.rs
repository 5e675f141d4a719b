// List command implementation

use anyhow::Result;

use crate::cli::LsArgs;
use crate::output::{format_bytes, format_timestamp};
use s3tool::oss::{list_keys, ListOutcome, ObjectStore};

/// Execute the ls command
///
/// Backend failures are reported on stderr and do not abort the run;
/// an invalid filter expression terminates before any request is made.
pub async fn execute_ls(
    args: &LsArgs,
    store: &dyn ObjectStore,
    bucket: &str,
    default_prefix: Option<&str>,
) -> Result<()> {
    let prefix = args.prefix.as_deref().or(default_prefix);

    match list_keys(store, prefix, args.filter.as_deref()).await {
        Ok(ListOutcome::NoObjects) => {
            println!(
                "No files found in the bucket \"{}\" with prefix: \"{}\".",
                bucket,
                prefix.unwrap_or("")
            );
        }
        Ok(ListOutcome::Objects { objects, truncated }) => {
            let mut total_count = 0;
            let mut total_size: u64 = 0;

            for obj in &objects {
                total_count += 1;
                total_size += obj.size;

                if args.long {
                    // Long format: timestamp size key
                    let timestamp = format_timestamp(&obj.last_modified);
                    let size_str = if args.human_readable {
                        format!("{:>10}", format_bytes(obj.size))
                    } else {
                        format!("{:>12}", obj.size)
                    };
                    println!("{} {} {}", timestamp, size_str, obj.key);
                } else {
                    // Short format: just the key
                    println!("{}", obj.key);
                }
            }

            // Print summary
            if args.long {
                println!();
                println!("Total: {} objects, {}", total_count, format_bytes(total_size));
            }

            if truncated {
                eprintln!("Warning: listing truncated, only the first page of results is shown");
            }
        }
        Err(e) if e.is_backend() => {
            eprintln!("ls failed: {}", e);
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
