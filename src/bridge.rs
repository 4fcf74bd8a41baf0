//! Client for the bridge's REST API.

use std::collections::HashMap;

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use strum_macros::{Display, EnumIter, EnumString};

use crate::color::ColorConverter;
use crate::config::BridgeConfig;
use crate::errors::Error;
use crate::group::{Group, GroupAttributes, NewGroup};
use crate::history::{MessageHistory, MessageType};
use crate::light::Light;
use crate::payload::LightState;
use crate::response::{LightingResponse, check_read_reply, created_id, parse_write_reply};
use crate::runtime::{self, Instant, Mutex};
use crate::transport::{HttpMethod, Transport, redact_username};
use crate::types::{ChromaticityPoint, GroupKind, RgbColor, RoomClass};
use crate::version::ApiVersion;

#[cfg(feature = "runtime-tokio")]
use crate::transport::HttpTransport;

type Result<T> = std::result::Result<T, Error>;

/// First API version that accepts `type` and `class` when creating groups.
pub const GROUP_TYPES_SINCE: ApiVersion = ApiVersion::new(1, 11, 0);

/// Top-level resource collections under `/api/<username>/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Resource {
    Lights,
    Groups,
    Rules,
    Schedules,
    Sensors,
}

/// A connection to one bridge.
///
/// Every call is a single HTTP request. Writes (`PUT`, `POST`, `DELETE`) are
/// serialized and spaced at least [`BridgeConfig::throttle`] apart; reads run
/// freely. Each request is bounded by [`BridgeConfig::timeout`].
///
/// # Example
///
/// ```ignore
/// use hue_lights_rs::{Bridge, BridgeConfig};
///
/// let bridge = Bridge::new(BridgeConfig::new("192.168.1.2", "newdeveloper"));
/// for light in bridge.get_lights().await?.values() {
///     println!("{}: {}", light.id(), light.name());
/// }
/// bridge.set_light_color_hex("1", "#FF8000").await?;
/// ```
#[derive(Debug)]
pub struct Bridge<T: Transport> {
    config: BridgeConfig,
    transport: T,
    history: Mutex<MessageHistory>,
    last_write: Mutex<Option<Instant>>,
    api_version: Mutex<Option<ApiVersion>>,
}

#[cfg(feature = "runtime-tokio")]
impl Bridge<HttpTransport> {
    /// Connect over HTTP using reqwest.
    pub fn new(config: BridgeConfig) -> Self {
        Self::with_transport(config, HttpTransport::new())
    }
}

impl<T: Transport> Bridge<T> {
    pub fn with_transport(config: BridgeConfig, transport: T) -> Self {
        let history = MessageHistory::with_max_entries(config.history_size);
        Bridge {
            config,
            transport,
            history: Mutex::new(history),
            last_write: Mutex::new(None),
            api_version: Mutex::new(None),
        }
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// The converter the color helpers use, per [`BridgeConfig::gamma`].
    pub fn converter(&self) -> ColorConverter {
        self.config.converter()
    }

    pub async fn history(&self) -> MessageHistory {
        self.history.lock().await.clone()
    }

    pub async fn clear_history(&self) {
        self.history.lock().await.clear();
    }

    /// Returns connection settings and a history summary.
    ///
    /// The username is left out since it grants full control of the bridge.
    pub async fn diagnostics(&self) -> Value {
        let history = self.history.lock().await;
        let summary = serde_json::to_value(history.summary()).unwrap_or_else(|e| {
            warn!("dropping history from diagnostics: {e}");
            Value::Null
        });
        json!({
            "host": self.config.host,
            "https": self.config.https,
            "gamma": self.config.gamma.to_string(),
            "throttle_ms": self.config.throttle_ms,
            "timeout_ms": self.config.timeout_ms,
            "history": summary,
        })
    }

    /// Full bridge configuration (`/config`).
    pub async fn get_config(&self) -> Result<Value> {
        self.read("config").await
    }

    /// Fetches the bridge's API version and remembers it for [`Bridge::compatible`].
    pub async fn api_version(&self) -> Result<ApiVersion> {
        let config = self.get_config().await?;
        let version: ApiVersion = config
            .get("apiversion")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::UnexpectedResponse("config without apiversion".to_string()))?
            .parse()?;
        *self.api_version.lock().await = Some(version);
        Ok(version)
    }

    /// Whether the bridge API lies within `min..=max` (no upper bound if `max` is `None`).
    ///
    /// Uses the version from the last [`Bridge::api_version`] call, fetching
    /// it only the first time.
    pub async fn compatible(&self, min: &ApiVersion, max: Option<&ApiVersion>) -> Result<bool> {
        let cached = *self.api_version.lock().await;
        let version = match cached {
            Some(version) => version,
            None => self.api_version().await?,
        };
        Ok(version >= *min && max.is_none_or(|max| version <= *max))
    }

    /// Fails with [`Error::UnsupportedApiVersion`] if the bridge is older than `required`.
    pub async fn require_api_version(&self, required: &ApiVersion) -> Result<ApiVersion> {
        let actual = self.api_version().await?;
        if actual < *required {
            return Err(Error::UnsupportedApiVersion {
                required: *required,
                actual,
            });
        }
        Ok(actual)
    }

    pub async fn get_lights(&self) -> Result<HashMap<String, Light>> {
        let lights: HashMap<String, Light> = self.read_as("lights").await?;
        Ok(lights
            .into_iter()
            .map(|(id, light)| {
                let light = light.with_id(&id);
                (id, light)
            })
            .collect())
    }

    pub async fn get_light(&self, id: &str) -> Result<Light> {
        let light: Light = self.read_as(&format!("lights/{id}")).await?;
        Ok(light.with_id(id))
    }

    /// Starts a search for new lights; results appear in `get_lights` later.
    pub async fn search_lights(&self) -> Result<()> {
        self.write(HttpMethod::Post, "lights", None).await?;
        Ok(())
    }

    pub async fn rename_light(&self, id: &str, name: &str) -> Result<()> {
        let body = json!({ "name": name });
        self.write(HttpMethod::Put, &format!("lights/{id}"), Some(&body))
            .await?;
        Ok(())
    }

    /// Applies a state update to one light.
    pub async fn set_light_state(&self, id: &str, state: &LightState) -> Result<LightingResponse> {
        let success = self
            .write_state(&format!("lights/{id}/state"), state)
            .await?;
        Ok(LightingResponse::light(id, state.clone()).with_success(success))
    }

    pub async fn set_light_xy(&self, id: &str, point: &ChromaticityPoint) -> Result<LightingResponse> {
        self.set_light_state(id, &LightState::from(point)).await
    }

    pub async fn set_light_color_rgb(&self, id: &str, rgb: &RgbColor) -> Result<LightingResponse> {
        let mut state = LightState::new();
        state.color(rgb, &self.converter());
        self.set_light_state(id, &state).await
    }

    /// Converts `hex` to xy and sends it; nothing is sent if `hex` is invalid.
    pub async fn set_light_color_hex(&self, id: &str, hex: &str) -> Result<LightingResponse> {
        let mut state = LightState::new();
        state.hex(hex, &self.converter())?;
        self.set_light_state(id, &state).await
    }

    pub async fn delete_light(&self, id: &str) -> Result<()> {
        self.delete(Resource::Lights, id).await
    }

    pub async fn get_groups(&self) -> Result<HashMap<String, Group>> {
        let groups: HashMap<String, Group> = self.read_as("groups").await?;
        Ok(groups
            .into_iter()
            .map(|(id, group)| {
                let group = group.with_id(&id);
                (id, group)
            })
            .collect())
    }

    pub async fn get_group(&self, id: &str) -> Result<Group> {
        let group: Group = self.read_as(&format!("groups/{id}")).await?;
        Ok(group.with_id(id))
    }

    /// Creates a plain light group and returns its id.
    pub async fn create_group(&self, name: &str, lights: &[&str]) -> Result<String> {
        self.create_group_of_kind(name, lights, GroupKind::LightGroup, RoomClass::Other)
            .await
    }

    /// Creates a group of the given kind and returns its id.
    ///
    /// `class` is sent for rooms only. Bridges older than
    /// [`GROUP_TYPES_SINCE`] get a plain light group with neither field.
    pub async fn create_group_of_kind(
        &self,
        name: &str,
        lights: &[&str],
        kind: GroupKind,
        class: RoomClass,
    ) -> Result<String> {
        let mut group = NewGroup::new(name, lights);
        if self.compatible(&GROUP_TYPES_SINCE, None).await? {
            group = group.typed(kind, class);
        } else if kind == GroupKind::Room {
            warn!("bridge API predates {GROUP_TYPES_SINCE}, creating {name:?} as a light group");
        }
        let body = serde_json::to_value(&group).map_err(Error::JsonDump)?;
        self.create(Resource::Groups, &body).await
    }

    /// Changes a group's name, members or room class.
    pub async fn set_group_attributes(&self, id: &str, attributes: &GroupAttributes) -> Result<Vec<Value>> {
        if !attributes.is_valid() {
            return Err(Error::NoAttribute);
        }
        let body = serde_json::to_value(attributes).map_err(Error::JsonDump)?;
        self.write(HttpMethod::Put, &format!("groups/{id}"), Some(&body))
            .await
    }

    /// Applies a state update to every light in a group.
    pub async fn set_group_action(&self, id: &str, state: &LightState) -> Result<LightingResponse> {
        let success = self
            .write_state(&format!("groups/{id}/action"), state)
            .await?;
        Ok(LightingResponse::group(id, state.clone()).with_success(success))
    }

    pub async fn set_group_color_hex(&self, id: &str, hex: &str) -> Result<LightingResponse> {
        let mut state = LightState::new();
        state.hex(hex, &self.converter())?;
        self.set_group_action(id, &state).await
    }

    pub async fn delete_group(&self, id: &str) -> Result<()> {
        self.delete(Resource::Groups, id).await
    }

    /// Time zones the bridge accepts in its `timezone` setting.
    pub async fn get_timezones(&self) -> Result<Vec<String>> {
        self.read_as("info/timezones").await
    }

    /// All objects of a resource, keyed by id.
    pub async fn list(&self, resource: Resource) -> Result<Value> {
        self.read(&resource.to_string()).await
    }

    pub async fn get(&self, resource: Resource, id: &str) -> Result<Value> {
        self.read(&format!("{resource}/{id}")).await
    }

    /// Creates an object and returns the id the bridge assigned.
    pub async fn create(&self, resource: Resource, body: &Value) -> Result<String> {
        let success = self
            .write(HttpMethod::Post, &resource.to_string(), Some(body))
            .await?;
        created_id(&success)
    }

    /// Updates attributes of an object; returns the bridge's success entries.
    pub async fn update(&self, resource: Resource, id: &str, body: &Value) -> Result<Vec<Value>> {
        self.write(HttpMethod::Put, &format!("{resource}/{id}"), Some(body))
            .await
    }

    pub async fn delete(&self, resource: Resource, id: &str) -> Result<()> {
        self.write(HttpMethod::Delete, &format!("{resource}/{id}"), None)
            .await?;
        Ok(())
    }

    async fn write_state(&self, path: &str, state: &LightState) -> Result<Vec<Value>> {
        if !state.is_valid() {
            return Err(Error::NoAttribute);
        }
        let body = serde_json::to_value(state).map_err(Error::JsonDump)?;
        self.write(HttpMethod::Put, path, Some(&body)).await
    }

    async fn read_as<R: DeserializeOwned>(&self, path: &str) -> Result<R> {
        let reply = self.read(path).await?;
        serde_json::from_value(reply).map_err(Error::JsonLoad)
    }

    async fn read(&self, path: &str) -> Result<Value> {
        let reply = self.send(HttpMethod::Get, path, None).await?;
        check_read_reply(reply)
    }

    async fn write(&self, method: HttpMethod, path: &str, body: Option<&Value>) -> Result<Vec<Value>> {
        parse_write_reply(self.send(method, path, body).await?)
    }

    async fn send(&self, method: HttpMethod, path: &str, body: Option<&Value>) -> Result<Value> {
        if !method.is_write() {
            return self.exchange(method, path, body).await;
        }

        // Held across the request so concurrent writes queue up behind each other.
        let mut last_write = self.last_write.lock().await;
        if let Some(last) = *last_write {
            let throttle = self.config.throttle();
            let elapsed = last.elapsed();
            if elapsed < throttle {
                let wait = throttle - elapsed;
                debug!("throttling {method} {path} for {wait:?}");
                runtime::sleep(wait).await;
            }
        }

        let result = self.exchange(method, path, body).await;
        *last_write = Some(Instant::now());
        result
    }

    async fn exchange(&self, method: HttpMethod, path: &str, body: Option<&Value>) -> Result<Value> {
        let url = format!("{}/{path}", self.config.base_url());
        let endpoint = format!("{method} {path}");

        debug!(
            "{method} {} {}",
            redact_username(&url),
            body.map(Value::to_string).unwrap_or_default()
        );
        self.history
            .lock()
            .await
            .record_request(&endpoint, body.unwrap_or(&Value::Null));

        let started = Instant::now();
        let result = runtime::timeout(
            self.config.timeout(),
            self.transport.request(method, &url, body),
        )
        .await
        .unwrap_or_else(|_| Err(Error::timeout(&endpoint)));

        let mut history = self.history.lock().await;
        match &result {
            Ok(reply) => {
                debug!("{endpoint} replied {reply}");
                history.record_response(&endpoint, reply, started.elapsed());
            }
            Err(e) => {
                debug!("{endpoint} failed: {e}");
                history.record_error(&e.to_string());
            }
        }
        result
    }
}
