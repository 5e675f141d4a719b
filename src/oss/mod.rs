mod aws_s3_object_store;
mod bucket_ops;
mod error;
mod key_filter;
mod object_store;
mod object_store_types;

pub use aws_s3_object_store::{AwsS3ObjectStore, AwsS3ObjectStoreConfig};
pub use bucket_ops::{list_keys, ListOutcome};
pub use error::ObjectStoreError;
pub use key_filter::KeyFilter;
pub use object_store::ObjectStore;
pub use object_store_types::{ListPage, ObjectMeta, PutOptions};
