//! This module provides [MemoryStorage], an in memory [ObjectStorage] which records every call made against it.
use crate::ObjectStorage;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

const _NOT_PROD: () = const {
    assert!(
        cfg!(debug_assertions),
        "You are trying to include mock code in a production build please run `cargo tree -i s3_client -e features -p <FAILING_PACKAGE>` to see how the mock feature is being included in [dependencies]"
    );
};

/// An object held by [MemoryStorage]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub content: Vec<u8>,
    pub content_type: Option<String>,
}

/// A call made against [MemoryStorage], in the order it was made
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageCall {
    List {
        bucket: String,
        prefix: Option<String>,
    },
    Get {
        bucket: String,
        key: String,
    },
    Put {
        bucket: String,
        key: String,
    },
    Delete {
        bucket: String,
        keys: Vec<String>,
    },
}

#[derive(Debug, Default)]
struct State {
    objects: BTreeMap<(String, String), StoredObject>,
    calls: Vec<StorageCall>,
    fail_lists: bool,
    fail_puts: bool,
    fail_deletes: bool,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    state: Arc<Mutex<State>>,
}

impl MemoryStorage {
    /// Seeds an object without recording a call
    pub fn insert(&self, bucket: &str, key: &str, content: impl Into<Vec<u8>>) {
        self.state.lock().unwrap().objects.insert(
            (bucket.to_string(), key.to_string()),
            StoredObject {
                content: content.into(),
                content_type: None,
            },
        );
    }

    /// Makes every subsequent list fail
    pub fn fail_lists(&self) {
        self.state.lock().unwrap().fail_lists = true;
    }

    /// Makes every subsequent put fail
    pub fn fail_puts(&self) {
        self.state.lock().unwrap().fail_puts = true;
    }

    /// Makes every subsequent bulk delete fail, leaving the objects in place
    pub fn fail_deletes(&self) {
        self.state.lock().unwrap().fail_deletes = true;
    }

    pub fn object(&self, bucket: &str, key: &str) -> Option<StoredObject> {
        self.state
            .lock()
            .unwrap()
            .objects
            .get(&(bucket.to_string(), key.to_string()))
            .cloned()
    }

    /// The keys currently stored in the bucket
    pub fn keys(&self, bucket: &str) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .objects
            .keys()
            .filter(|(b, _)| b == bucket)
            .map(|(_, k)| k.clone())
            .collect()
    }

    pub fn calls(&self) -> Vec<StorageCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn get_calls(&self) -> usize {
        self.count(|c| matches!(c, StorageCall::Get { .. }))
    }

    pub fn put_calls(&self) -> usize {
        self.count(|c| matches!(c, StorageCall::Put { .. }))
    }

    pub fn delete_calls(&self) -> usize {
        self.count(|c| matches!(c, StorageCall::Delete { .. }))
    }

    fn count(&self, f: impl Fn(&StorageCall) -> bool) -> usize {
        self.state.lock().unwrap().calls.iter().filter(|c| f(c)).count()
    }
}

impl ObjectStorage for MemoryStorage {
    async fn list_keys(&self, bucket: &str, prefix: Option<&str>) -> anyhow::Result<Vec<String>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(StorageCall::List {
            bucket: bucket.to_string(),
            prefix: prefix.map(str::to_owned),
        });
        if state.fail_lists {
            anyhow::bail!("could not list objects in bucket {bucket}");
        }
        Ok(state
            .objects
            .keys()
            .filter(|(b, k)| b == bucket && prefix.is_none_or(|p| k.starts_with(p)))
            .map(|(_, k)| k.clone())
            .collect())
    }

    async fn get(&self, bucket: &str, key: &str) -> anyhow::Result<Vec<u8>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(StorageCall::Get {
            bucket: bucket.to_string(),
            key: key.to_string(),
        });
        state
            .objects
            .get(&(bucket.to_string(), key.to_string()))
            .map(|o| o.content.clone())
            .ok_or_else(|| anyhow::anyhow!("could not get item {key} from bucket {bucket}"))
    }

    async fn put(
        &self,
        bucket: &str,
        key: &str,
        content: Vec<u8>,
        content_type: &str,
    ) -> anyhow::Result<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(StorageCall::Put {
            bucket: bucket.to_string(),
            key: key.to_string(),
        });
        if state.fail_puts {
            anyhow::bail!("could not put item {key} into bucket {bucket}");
        }
        state.objects.insert(
            (bucket.to_string(), key.to_string()),
            StoredObject {
                content,
                content_type: Some(content_type.to_string()),
            },
        );
        Ok(())
    }

    async fn delete_objects(&self, bucket: &str, keys: Vec<String>) -> anyhow::Result<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(StorageCall::Delete {
            bucket: bucket.to_string(),
            keys: keys.clone(),
        });
        if state.fail_deletes {
            anyhow::bail!("could not delete {} objects from bucket {bucket}", keys.len());
        }
        for key in keys {
            state.objects.remove(&(bucket.to_string(), key));
        }
        Ok(())
    }
}
