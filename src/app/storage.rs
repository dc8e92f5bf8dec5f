use leptos::prelude::*;
use serde::{de::DeserializeOwned, Serialize};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::{use_local_storage_with_options, UseStorageOptions};

/// A value mirrored as JSON into the browser's local storage under `key`.
///
/// Missing or unreadable entries read as `T::default()`. Every write through
/// the returned setter is persisted. The server has no storage, so it renders
/// with the default; during hydration the client keeps that default too and
/// only reads storage an animation frame later. Otherwise a stored value would
/// never reach attributes the server already rendered (the theme class).
pub fn persisted<T>(key: &'static str) -> (Signal<T>, WriteSignal<T>)
where
    T: Clone + Default + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        let (value, set_value, _) = use_local_storage_with_options::<T, JsonSerdeWasmCodec>(
            key,
            UseStorageOptions::default().delay_during_hydration(true),
        );
        (value, set_value)
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        let (value, set_value) = signal(T::default());
        (value.into(), set_value)
    }
}
