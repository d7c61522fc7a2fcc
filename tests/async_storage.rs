//! Integration tests for the async typed storage facade.

#![cfg(feature = "async")]

mod common;

use std::io;
use std::sync::Arc;

use common::{AppSpec, CounterSpec, Enabled, Key, Tags, Window};
use typed_kv::{AsyncBaseStorage, AsyncTypedStorage, MemoryStorage, Operation};

/// A store that fails every call, like a backend that went away.
struct OfflineStorage;

fn offline() -> io::Error {
    io::Error::new(io::ErrorKind::NotConnected, "store is offline")
}

#[async_trait::async_trait]
impl AsyncBaseStorage for OfflineStorage {
    type Error = io::Error;

    async fn get(&self, _key: &str) -> Result<Option<String>, io::Error> {
        Err(offline())
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<(), io::Error> {
        Err(offline())
    }

    async fn remove(&self, _key: &str) -> Result<(), io::Error> {
        Err(offline())
    }

    async fn clear(&self) -> Result<(), io::Error> {
        Err(offline())
    }
}

#[tokio::test]
async fn set_get_remove() -> Result<(), anyhow::Error> {
    let storage = AsyncTypedStorage::new(CounterSpec::new(), Arc::new(MemoryStorage::new()));

    assert_eq!(storage.get::<Key>().await?, None);
    storage.set::<Key>(&100.0).await?;
    assert_eq!(storage.get::<Key>().await?, Some(100.0));

    storage.remove::<Key>().await?;
    assert_eq!(storage.get::<Key>().await?, None);
    Ok(())
}

#[tokio::test]
async fn prefixes_isolate_shared_store() -> Result<(), anyhow::Error> {
    let base = Arc::new(MemoryStorage::new());
    let left = AsyncTypedStorage::new(CounterSpec::new(), Arc::clone(&base))
        .with_key_prefix("left");
    let right = AsyncTypedStorage::new(CounterSpec::new(), Arc::clone(&base))
        .with_key_prefix("right");

    left.set::<Key>(&7.0).await?;
    assert_eq!(right.get::<Key>().await?, None);
    assert_eq!(base.keys(), vec!["left_key".to_string()]);
    Ok(())
}

#[tokio::test]
async fn corrupt_value_is_an_error() -> Result<(), anyhow::Error> {
    let base = Arc::new(MemoryStorage::with_entries([("enabled", "1")]));
    let storage = AsyncTypedStorage::new(AppSpec::new(), Arc::clone(&base));

    let err = match storage.get::<Enabled>().await {
        Ok(value) => anyhow::bail!("expected a decode failure, got {:?}", value),
        Err(err) => err,
    };
    assert_eq!(err.operation(), Operation::Get);
    assert!(err.is_corrupt());
    Ok(())
}

#[tokio::test]
async fn composite_values() -> Result<(), anyhow::Error> {
    let base = MemoryStorage::new();
    let storage = AsyncTypedStorage::new(AppSpec::new(), &base)
        .with_key_prefix("ui");

    storage.set::<Tags>(&vec!["x".to_string()]).await?;
    storage.set::<Window>(&(1.0, -0.0, false)).await?;

    assert_eq!(storage.get::<Tags>().await?, Some(vec!["x".to_string()]));
    let (width, height, maximized) = storage
        .get::<Window>()
        .await?
        .ok_or_else(|| anyhow::anyhow!("window should be set"))?;
    assert_eq!(width, 1.0);
    assert!(height == 0.0 && height.is_sign_negative());
    assert!(!maximized);

    storage.clear().await?;
    assert!(base.is_empty());
    Ok(())
}

#[tokio::test]
async fn backend_failures_name_operation_and_key() -> Result<(), anyhow::Error> {
    let storage = AsyncTypedStorage::new(CounterSpec::new(), OfflineStorage);

    let err = match storage.get::<Key>().await {
        Ok(value) => anyhow::bail!("offline store returned {:?}", value),
        Err(err) => err,
    };
    assert_eq!(err.operation(), Operation::Get);
    assert_eq!(err.key(), "key");
    assert!(!err.is_corrupt());
    assert_eq!(
        err.to_string(),
        "Failed to get value for key 'key': store is offline"
    );

    let err = match storage.set::<Key>(&1.0).await {
        Ok(()) => anyhow::bail!("offline store accepted a write"),
        Err(err) => err,
    };
    assert_eq!(err.operation(), Operation::Set);
    assert_eq!(
        err.to_string(),
        "Failed to set value for key 'key': store is offline"
    );

    let result = storage.remove::<Key>().await;
    assert!(matches!(
        result,
        Err(e) if e.operation() == Operation::Remove && !e.is_corrupt()
    ));

    let result = storage.clear().await;
    assert!(matches!(result, Err(e) if e.operation() == Operation::Clear));
    Ok(())
}
