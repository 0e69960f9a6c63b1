//! Typed JSON documents on top of [`crate::objects`].

use aws_sdk_s3::Client;
use serde::{Serialize, de::DeserializeOwned};

use crate::error::StorageError;
use crate::objects;

const JSON: &str = "application/json";

/// Load and deserialize a JSON document.
pub async fn load_json<T: DeserializeOwned>(
    client: &Client,
    bucket: &str,
    key: &str,
) -> Result<T, StorageError> {
    let output = objects::get_object(client, bucket, key).await?;
    if let Some(ct) = &output.content_type
        && !ct.starts_with(JSON)
    {
        tracing::warn!(key, content_type = %ct, "document stored with unexpected content type");
    }
    Ok(serde_json::from_slice(&output.body)?)
}

/// Save a JSON document, replacing any existing one. Returns the new ETag.
pub async fn save_json<T: Serialize>(
    client: &Client,
    bucket: &str,
    key: &str,
    value: &T,
) -> Result<String, StorageError> {
    let body = serde_json::to_vec(value)?;
    objects::put_object(client, bucket, key, body, Some(JSON)).await
}

/// Create a write-once JSON document. Fails with
/// `StorageError::AlreadyExists` instead of overwriting.
pub async fn create_json<T: Serialize>(
    client: &Client,
    bucket: &str,
    key: &str,
    value: &T,
) -> Result<String, StorageError> {
    let body = serde_json::to_vec(value)?;
    objects::put_object_if_absent(client, bucket, key, body, Some(JSON)).await
}

/// Load every JSON document under a prefix.
///
/// Keys that are not `.json` are skipped. A document deleted between the
/// list and the get is skipped as well.
pub async fn list_json<T: DeserializeOwned>(
    client: &Client,
    bucket: &str,
    prefix: &str,
) -> Result<Vec<T>, StorageError> {
    let keys = objects::list_objects(client, bucket, prefix).await?;

    let mut documents = Vec::with_capacity(keys.len());
    for key in keys.iter().filter(|k| k.ends_with(".json")) {
        match load_json(client, bucket, key).await {
            Ok(doc) => documents.push(doc),
            Err(StorageError::NotFound { key }) => {
                tracing::debug!(%key, "document vanished during listing");
            }
            Err(e) => return Err(e),
        }
    }

    tracing::debug!(prefix, count = documents.len(), "listed documents");
    Ok(documents)
}
