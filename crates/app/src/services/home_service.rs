//! Home service — use-cases behind the home control HTTP surface.

use lightapi_domain::brightness::Brightness;
use lightapi_domain::error::{LightApiError, NotFoundError};
use lightapi_domain::home::{Home, HomeStatus};
use lightapi_domain::id::{LampId, RoomId};
use lightapi_domain::lamp::{Lamp, LampListing, LampSummary};
use lightapi_domain::power::PowerState;
use lightapi_domain::room::{Room, RoomListing, RoomSummary};
use lightapi_domain::scene::SceneListing;

use crate::light_handle::LightHandle;
use crate::ports::{LightingBridge, SocketGateway};
use crate::scene_rotation::SceneRotation;

/// Controls one home: a linked [`Home`] graph on top of a lighting bridge,
/// plus the sockets on a mesh gateway.
///
/// The graph is fixed after construction. Lookups of unknown rooms or lamps
/// fail with [`LightApiError::NotFound`] before any vendor call is made.
pub struct HomeService<B, G> {
    bridge: B,
    gateway: G,
    home: Home,
    wake_rooms: Vec<RoomId>,
    rotation: SceneRotation,
}

impl<B, G> HomeService<B, G>
where
    B: LightingBridge + Sync,
    G: SocketGateway + Sync,
{
    /// Create a service over an already linked home.
    ///
    /// `wake_rooms` are switched on when the home is toggled from inactive.
    pub fn new(bridge: B, gateway: G, home: Home, wake_rooms: Vec<RoomId>) -> Self {
        Self {
            bridge,
            gateway,
            home,
            wake_rooms,
            rotation: SceneRotation::new(),
        }
    }

    /// Read the bridge inventory, link it, and create the service.
    ///
    /// # Errors
    ///
    /// Propagates bridge failures while reading the inventory.
    pub async fn connect(
        bridge: B,
        gateway: G,
        wake_rooms: Vec<RoomId>,
    ) -> Result<Self, LightApiError> {
        let home = Home::link(bridge.inventory().await?);

        tracing::info!(
            lamps = home.lamps().len(),
            rooms = home.rooms().len(),
            scenes = home.scenes().len(),
            groups = home.groups().len(),
            "home graph linked"
        );
        for room in home.rooms() {
            tracing::debug!(
                room = %room,
                lamps = room.lamps.len(),
                scenes = room.scenes.len(),
                groups = room.groups.len(),
                "room linked"
            );
        }
        for id in &wake_rooms {
            if home.room(*id).is_none() {
                tracing::warn!(room = %id, "wake room is not on the bridge");
            }
        }

        Ok(Self::new(bridge, gateway, home, wake_rooms))
    }

    fn room(&self, id: RoomId) -> Result<&Room, LightApiError> {
        self.home.room(id).ok_or_else(|| {
            NotFoundError {
                entity: "Room",
                id: id.to_string(),
            }
            .into()
        })
    }

    fn lamp(&self, id: LampId) -> Result<&Lamp, LightApiError> {
        self.home.lamp(id).ok_or_else(|| {
            NotFoundError {
                entity: "Lamp",
                id: id.to_string(),
            }
            .into()
        })
    }

    // ── Home ────────────────────────────────────────────────────────

    /// Whether any group in any room is on. Read fresh from the bridge.
    ///
    /// # Errors
    ///
    /// Propagates bridge failures.
    pub async fn is_active(&self) -> Result<bool, LightApiError> {
        for room in self.home.rooms() {
            for group in &room.groups {
                let on = LightHandle::new(&self.bridge, group.target()).is_on().await?;
                tracing::debug!(room = %room.id, group = %group.id, on, "group state");
                if on {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }

    /// Current home status.
    ///
    /// # Errors
    ///
    /// Propagates bridge failures.
    pub async fn status(&self) -> Result<HomeStatus, LightApiError> {
        Ok(HomeStatus {
            home_active: self.is_active().await?,
        })
    }

    /// Switch the wake rooms on if nothing is lit; otherwise switch the
    /// sockets and every room off. Returns the status afterwards.
    ///
    /// # Errors
    ///
    /// Propagates bridge and gateway failures.
    pub async fn toggle(&self) -> Result<HomeStatus, LightApiError> {
        if self.is_active().await? {
            tracing::info!("home active, switching everything off");
            self.set_sockets(PowerState::Off).await?;
            for room in self.home.rooms() {
                self.switch_room(room, PowerState::Off).await?;
            }
        } else {
            tracing::info!(rooms = self.wake_rooms.len(), "home inactive, waking rooms");
            for id in &self.wake_rooms {
                match self.home.room(*id) {
                    Some(room) => self.switch_room(room, PowerState::On).await?,
                    None => tracing::warn!(room = %id, "wake room not found, skipped"),
                }
            }
        }
        self.status().await
    }

    /// Set every room, then the sockets, to `state`.
    ///
    /// # Errors
    ///
    /// Propagates bridge and gateway failures.
    pub async fn set_active(&self, state: PowerState) -> Result<(), LightApiError> {
        for room in self.home.rooms() {
            self.switch_room(room, state).await?;
        }
        self.set_sockets(state).await?;
        Ok(())
    }

    /// Set every socket-capable gateway device to `state`. Returns how many
    /// devices were switched.
    ///
    /// # Errors
    ///
    /// Propagates gateway failures.
    pub async fn set_sockets(&self, state: PowerState) -> Result<usize, LightApiError> {
        let devices = self.gateway.devices().await?;
        let mut switched = 0;
        for device in devices.iter().filter(|device| device.has_socket_control) {
            self.gateway
                .set_socket_state(device.id, state.is_on())
                .await?;
            switched += 1;
        }
        tracing::debug!(switched, state = %state, "sockets switched");
        Ok(switched)
    }

    // ── Rooms ───────────────────────────────────────────────────────

    #[must_use]
    pub fn rooms(&self) -> Vec<RoomListing> {
        self.home.rooms().iter().map(Room::listing).collect()
    }

    /// # Errors
    ///
    /// Returns [`LightApiError::NotFound`] for an unknown room.
    pub fn room_summary(&self, id: RoomId) -> Result<RoomSummary, LightApiError> {
        Ok(self.room(id)?.summary())
    }

    async fn switch_room(&self, room: &Room, state: PowerState) -> Result<(), LightApiError> {
        for group in &room.groups {
            LightHandle::new(&self.bridge, group.target())
                .set_on(state.is_on())
                .await?;
        }
        tracing::debug!(room = %room, state = %state, "room switched");
        Ok(())
    }

    /// Switch every group in the room.
    ///
    /// # Errors
    ///
    /// Returns [`LightApiError::NotFound`] for an unknown room, or propagates
    /// bridge failures.
    pub async fn set_room_active(&self, id: RoomId, state: PowerState) -> Result<(), LightApiError> {
        let room = self.room(id)?;
        self.switch_room(room, state).await
    }

    /// Add `step` to the brightness of every group in the room.
    ///
    /// # Errors
    ///
    /// Returns [`LightApiError::NotFound`] for an unknown room, or propagates
    /// bridge failures.
    pub async fn step_room_brightness(&self, id: RoomId, step: i32) -> Result<(), LightApiError> {
        let room = self.room(id)?;
        for group in &room.groups {
            let written = LightHandle::new(&self.bridge, group.target())
                .step_brightness(step)
                .await?;
            tracing::debug!(group = %group.id, step, brightness = %written, "brightness stepped");
        }
        Ok(())
    }

    /// Raise every group in the room to at least `floor`.
    ///
    /// # Errors
    ///
    /// Returns [`LightApiError::NotFound`] for an unknown room, or propagates
    /// bridge failures.
    pub async fn raise_room_brightness(
        &self,
        id: RoomId,
        floor: Brightness,
    ) -> Result<(), LightApiError> {
        let room = self.room(id)?;
        for group in &room.groups {
            LightHandle::new(&self.bridge, group.target())
                .raise_brightness(floor)
                .await?;
        }
        Ok(())
    }

    // ── Scenes ──────────────────────────────────────────────────────

    /// # Errors
    ///
    /// Returns [`LightApiError::NotFound`] for an unknown room.
    pub fn room_scenes(&self, id: RoomId) -> Result<Vec<SceneListing>, LightApiError> {
        Ok(self.room(id)?.scenes.iter().map(SceneListing::from).collect())
    }

    /// Recall every scene in the room called `name`. Returns how many were
    /// recalled; zero is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`LightApiError::NotFound`] for an unknown room, or propagates
    /// bridge failures.
    pub async fn activate_named_scene(&self, id: RoomId, name: &str) -> Result<usize, LightApiError> {
        let room = self.room(id)?;
        let mut recalled = 0;
        for scene in room.scenes_named(name) {
            self.bridge.recall_scene(scene.id).await?;
            recalled += 1;
        }
        if recalled == 0 {
            tracing::debug!(room = %room, scene = name, "no such scene in room");
        }
        Ok(recalled)
    }

    /// Recall the room's next scene in round-robin order. `None` when the
    /// room has no scenes.
    ///
    /// # Errors
    ///
    /// Returns [`LightApiError::NotFound`] for an unknown room, or propagates
    /// bridge failures.
    pub async fn next_scene(&self, id: RoomId) -> Result<Option<SceneListing>, LightApiError> {
        let room = self.room(id)?;
        let Some(index) = self.rotation.advance(room.id, room.scenes.len()) else {
            return Ok(None);
        };
        let scene = &room.scenes[index];
        self.bridge.recall_scene(scene.id).await?;
        tracing::info!(room = %room, scene = %scene, "next scene recalled");
        Ok(Some(SceneListing::from(scene)))
    }

    // ── Lamps ───────────────────────────────────────────────────────

    #[must_use]
    pub fn lamps(&self) -> Vec<LampListing> {
        self.home.lamps().iter().map(Lamp::listing).collect()
    }

    /// Lamp details with live state.
    ///
    /// # Errors
    ///
    /// Returns [`LightApiError::NotFound`] for an unknown lamp, or propagates
    /// bridge failures.
    pub async fn lamp_summary(&self, id: LampId) -> Result<LampSummary, LightApiError> {
        let lamp = self.lamp(id)?;
        let state = LightHandle::new(&self.bridge, lamp.target()).state().await?;
        Ok(LampSummary {
            name: lamp.name.clone(),
            id: lamp.id,
            on: state.on,
            brightness: state.brightness,
        })
    }

    /// # Errors
    ///
    /// Returns [`LightApiError::NotFound`] for an unknown lamp, or propagates
    /// bridge failures.
    pub async fn set_lamp_active(&self, id: LampId, state: PowerState) -> Result<(), LightApiError> {
        let lamp = self.lamp(id)?;
        LightHandle::new(&self.bridge, lamp.target())
            .set_on(state.is_on())
            .await
    }

    /// # Errors
    ///
    /// Returns [`LightApiError::NotFound`] for an unknown lamp, or propagates
    /// bridge failures.
    pub async fn step_lamp_brightness(&self, id: LampId, step: i32) -> Result<(), LightApiError> {
        let lamp = self.lamp(id)?;
        LightHandle::new(&self.bridge, lamp.target())
            .step_brightness(step)
            .await?;
        Ok(())
    }
}
