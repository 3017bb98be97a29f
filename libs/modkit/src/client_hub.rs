//! Type-keyed registry of module clients.
//!
//! Providers register an implementation once under its interface type
//! (`register::<dyn my::Api>(arc)`); consumers fetch it back by the same type.
//! The key is `type_name::<T>()`, which also works for `T = dyn Trait`.
//!
//! Re-registering replaces the previous value; `Arc`s already handed out stay
//! valid. Tests register a mock under the same trait type.

use parking_lot::RwLock;
use std::{any::Any, collections::HashMap, fmt, sync::Arc};

#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct TypeKey(&'static str);

impl TypeKey {
    #[inline]
    fn of<T: ?Sized + 'static>() -> Self {
        TypeKey(std::any::type_name::<T>())
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientHubError {
    #[error("client not found: type={type_key:?}")]
    NotFound { type_key: TypeKey },

    #[error("type mismatch in hub for type={type_key:?}")]
    TypeMismatch { type_key: TypeKey },
}

type Boxed = Box<dyn Any + Send + Sync>;

#[derive(Default)]
pub struct ClientHub {
    map: RwLock<HashMap<TypeKey, Boxed>>,
}

impl ClientHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a client under the interface type `T`.
    pub fn register<T>(&self, client: Arc<T>)
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.map.write().insert(TypeKey::of::<T>(), Box::new(client));
    }

    /// Fetch a client by interface type `T`.
    pub fn get<T>(&self) -> Result<Arc<T>, ClientHubError>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let type_key = TypeKey::of::<T>();
        let map = self.map.read();
        let boxed = map
            .get(&type_key)
            .ok_or(ClientHubError::NotFound { type_key })?;

        boxed
            .downcast_ref::<Arc<T>>()
            .cloned()
            .ok_or(ClientHubError::TypeMismatch { type_key })
    }

    pub fn len(&self) -> usize {
        self.map.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.read().is_empty()
    }
}

impl fmt::Debug for ClientHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys: Vec<TypeKey> = self.map.read().keys().copied().collect();
        f.debug_struct("ClientHub").field("clients", &keys).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    trait Greeter: Send + Sync {
        fn greet(&self) -> String;
    }

    trait Counter: Send + Sync {
        fn count(&self) -> usize;
    }

    struct Hello(&'static str);
    impl Greeter for Hello {
        fn greet(&self) -> String {
            format!("hello {}", self.0)
        }
    }

    #[test]
    fn register_and_get_dyn_trait() {
        let hub = ClientHub::new();
        let api: Arc<dyn Greeter> = Arc::new(Hello("umai"));
        hub.register::<dyn Greeter>(api.clone());

        let got = hub.get::<dyn Greeter>().unwrap();
        assert_eq!(got.greet(), "hello umai");
        assert!(Arc::ptr_eq(&api, &got));
    }

    #[test]
    fn missing_client_is_not_found() {
        let hub = ClientHub::new();
        hub.register::<dyn Greeter>(Arc::new(Hello("x")));

        match hub.get::<dyn Counter>() {
            Err(ClientHubError::NotFound { .. }) => {}
            other => panic!("expected NotFound, got {:?}", other.map(|c| c.count())),
        }
    }

    #[test]
    fn reregister_replaces_previous_client() {
        let hub = ClientHub::new();
        hub.register::<dyn Greeter>(Arc::new(Hello("first")));
        hub.register::<dyn Greeter>(Arc::new(Hello("second")));
        assert_eq!(hub.len(), 1);
        assert_eq!(hub.get::<dyn Greeter>().unwrap().greet(), "hello second");
        assert!(!hub.is_empty());
    }
}
