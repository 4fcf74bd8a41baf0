//! Light groups managed by the bridge.

use serde::{Deserialize, Serialize};

use crate::response::{LightingResponse, Target};
use crate::status::LightStatus;
use crate::types::{GroupKind, RoomClass};

/// A group of lights defined on the bridge.
///
/// Sending a [`crate::LightState`] to a group with
/// [`Bridge::set_group_action`](crate::Bridge::set_group_action) applies it to
/// every member in one request.
///
/// # Example
///
/// ```
/// use hue_lights_rs::Group;
///
/// let group = Group::new("1", "Living Room", &["3", "4"]);
/// assert_eq!(group.lights(), ["3", "4"]);
/// assert!(group.contains("4"));
/// ```
#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Group {
    #[serde(skip)]
    id: String,
    name: String,
    #[serde(default)]
    lights: Vec<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    class: Option<String>,
    #[serde(default)]
    action: LightStatus,
}

impl Group {
    pub fn new(id: &str, name: &str, lights: &[&str]) -> Self {
        Group {
            id: id.to_string(),
            name: name.to_string(),
            lights: lights.iter().map(|l| l.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ids of the member lights.
    pub fn lights(&self) -> &[String] {
        &self.lights
    }

    pub fn contains(&self, light_id: &str) -> bool {
        self.lights.iter().any(|id| id == light_id)
    }

    /// Bridge group type, e.g. "LightGroup" or "Room".
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    /// Room category; `None` for groups that are not rooms.
    pub fn room_class(&self) -> Option<RoomClass> {
        self.class.as_deref().map(RoomClass::from_name)
    }

    pub fn is_room(&self) -> bool {
        self.kind.as_deref() == Some("Room")
    }

    /// The last action sent to the group.
    pub fn action(&self) -> &LightStatus {
        &self.action
    }

    /// Update the cached action from a state-update response.
    ///
    /// Returns `false` if the response was addressed elsewhere.
    pub fn process_reply(&mut self, resp: &LightingResponse) -> bool {
        match &resp.target {
            Target::Group(id) if *id == self.id => {
                self.action.update_from_state(&resp.state);
                true
            }
            _ => false,
        }
    }

    pub(crate) fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }
}

/// Request body for creating a group.
#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, Clone)]
pub(crate) struct NewGroup {
    name: String,
    lights: Vec<String>,
    #[serde(rename = "type")]
    kind: Option<GroupKind>,
    class: Option<RoomClass>,
}

impl NewGroup {
    pub(crate) fn new(name: &str, lights: &[&str]) -> Self {
        NewGroup {
            name: name.to_string(),
            lights: lights.iter().map(|l| l.to_string()).collect(),
            kind: None,
            class: None,
        }
    }

    /// Room classes only apply to rooms; other kinds ignore `class`.
    pub(crate) fn typed(mut self, kind: GroupKind, class: RoomClass) -> Self {
        self.kind = Some(kind);
        self.class = (kind == GroupKind::Room).then_some(class);
        self
    }
}

/// Changes to a group's name, membership or room class.
///
/// # Example
///
/// ```
/// use hue_lights_rs::{GroupAttributes, RoomClass};
///
/// let mut attrs = GroupAttributes::new();
/// attrs.name("Den").lights(&["2", "5"]).class(RoomClass::Recreation);
/// assert_eq!(
///     serde_json::to_value(&attrs).unwrap(),
///     serde_json::json!({"name": "Den", "lights": ["2", "5"], "class": "Recreation"})
/// );
/// ```
#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, Clone, Default, PartialEq)]
pub struct GroupAttributes {
    name: Option<String>,
    lights: Option<Vec<String>>,
    class: Option<RoomClass>,
}

impl GroupAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.name.is_some() || self.lights.is_some() || self.class.is_some()
    }

    pub fn name(&mut self, name: &str) -> &mut Self {
        self.name = Some(name.to_string());
        self
    }

    /// Replaces the member list.
    pub fn lights(&mut self, lights: &[&str]) -> &mut Self {
        self.lights = Some(lights.iter().map(|l| l.to_string()).collect());
        self
    }

    /// Only rooms accept a class (API 1.11 and later).
    pub fn class(&mut self, class: RoomClass) -> &mut Self {
        self.class = Some(class);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::LightState;
    use crate::types::Brightness;
    use serde_json::json;

    #[test]
    fn test_parse_bridge_group() {
        let group: Group = serde_json::from_value(json!({
            "action": {"on": true, "bri": 254, "hue": 33536, "sat": 144, "xy": [0.346, 0.3568]},
            "lights": ["1", "2"],
            "name": "Group 1",
            "type": "LightGroup"
        }))
        .unwrap();
        let group = group.with_id("1");

        assert_eq!(group.name(), "Group 1");
        assert!(group.contains("2"));
        assert!(!group.contains("3"));
        assert_eq!(group.kind(), Some("LightGroup"));
        assert!(!group.is_room());
        assert_eq!(group.room_class(), None);
        assert!(group.action().emitting());
    }

    #[test]
    fn test_parse_bridge_room() {
        let group: Group = serde_json::from_value(json!({
            "name": "Upstairs",
            "lights": [],
            "type": "Room",
            "class": "Kids Bedroom"
        }))
        .unwrap();

        assert!(group.is_room());
        assert!(group.lights().is_empty());
        assert_eq!(group.room_class(), Some(RoomClass::KidsBedroom));
    }

    #[test]
    fn test_new_group_body() {
        let plain = NewGroup::new("Desk", &["1"]);
        assert_eq!(
            serde_json::to_value(&plain).unwrap(),
            json!({"name": "Desk", "lights": ["1"]})
        );

        let light_group = NewGroup::new("Desk", &["1"]).typed(GroupKind::LightGroup, RoomClass::Office);
        assert_eq!(
            serde_json::to_value(&light_group).unwrap(),
            json!({"name": "Desk", "lights": ["1"], "type": "LightGroup"})
        );

        let room = NewGroup::new("Den", &[]).typed(GroupKind::Room, RoomClass::Office);
        assert_eq!(
            serde_json::to_value(&room).unwrap(),
            json!({"name": "Den", "lights": [], "type": "Room", "class": "Office"})
        );
    }

    #[test]
    fn test_group_attributes_validity() {
        let mut attrs = GroupAttributes::new();
        assert!(!attrs.is_valid());
        attrs.lights(&[]);
        assert!(attrs.is_valid());
        assert_eq!(serde_json::to_value(&attrs).unwrap(), json!({"lights": []}));
    }

    #[test]
    fn test_process_reply_matches_groups_only() {
        let mut group = Group::new("1", "Kitchen", &["1"]);
        let state = LightState::from(&Brightness::create(10).unwrap());

        assert!(!group.process_reply(&LightingResponse::light("1", state.clone())));
        assert!(group.process_reply(&LightingResponse::group("1", state)));
        assert_eq!(group.action().brightness(), Brightness::create(10));
    }
}
