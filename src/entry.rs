/// A (key, value) pair stored in a `MaxHeap`.
/// Only the key takes part in comparisons; the value is carried along untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeapEntry<K: Ord, V> {
    key: K,
    value: V
}

impl<K: Ord, V> HeapEntry<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Self{key, value}
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    /// Drop the key and keep the payload
    pub fn into_value(self) -> V {
        self.value
    }

    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K: Ord, V> From<(K, V)> for HeapEntry<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::HeapEntry;

    #[test]
    fn parts() {
        let ent: HeapEntry<u32, &str> = (4, "four").into();
        assert_eq!(*ent.key(), 4);
        assert_eq!(*ent.value(), "four");
        assert_eq!(ent.clone().into_parts(), (4, "four"));
        assert_eq!(ent.into_value(), "four");
    }
}
