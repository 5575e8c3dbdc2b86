use std::{collections::HashMap, sync::Arc};

use ember_protocol::{
    ClientPacket,
    client::play::{CLevelSoundEvent, LevelSound},
};
use ember_util::math::{position::BlockPos, vector2::Vector2, vector3::Vector3};
use tokio::sync::RwLock;

use crate::net::Client;

/// The part of a level that routes packets to the clients watching it.
#[derive(Default)]
pub struct World {
    /// Clients which currently have a chunk loaded, keyed by chunk coordinate.
    chunk_observers: RwLock<HashMap<Vector2<i32>, Vec<Arc<Client>>>>,
}

impl World {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_chunk_observer(&self, chunk: Vector2<i32>, client: Arc<Client>) {
        let mut observers = self.chunk_observers.write().await;
        let clients = observers.entry(chunk).or_default();
        if !clients.iter().any(|observer| observer.id == client.id) {
            clients.push(client);
        }
    }

    pub async fn remove_chunk_observer(&self, chunk: Vector2<i32>, client_id: usize) {
        let mut observers = self.chunk_observers.write().await;
        if let Some(clients) = observers.get_mut(&chunk) {
            clients.retain(|observer| observer.id != client_id);
            if clients.is_empty() {
                observers.remove(&chunk);
            }
        }
    }

    /// Sends `packet` to every client observing `chunk`. The packet is
    /// serialized once.
    pub async fn add_chunk_packet<P>(&self, chunk: Vector2<i32>, packet: &P)
    where
        P: ClientPacket + Sync,
    {
        // Sends may wait on a full queue, the map must not stay locked meanwhile.
        let Some(clients) = self.chunk_observers.read().await.get(&chunk).cloned() else {
            return;
        };

        let packet_data = match packet.to_bytes() {
            Ok(packet_data) => packet_data,
            Err(err) => {
                log::error!("Failed to serialize packet {}: {}", P::PACKET_ID, err);
                return;
            }
        };
        for client in &clients {
            client.enqueue_packet_data(packet_data.clone()).await;
        }
    }

    pub async fn broadcast_level_sound_event(&self, position: Vector3<f32>, sound: LevelSound) {
        let chunk = BlockPos::floored(
            f64::from(position.x),
            f64::from(position.y),
            f64::from(position.z),
        )
        .chunk_coordinate();
        self.add_chunk_packet(chunk, &CLevelSoundEvent::new(sound, position))
            .await;
    }

    /// Plays `sound` at the centre of the block.
    pub async fn play_block_sound(&self, sound: LevelSound, position: BlockPos) {
        self.broadcast_level_sound_event(position.to_centered_f32(), sound)
            .await;
    }
}
