use ember_inventory::{InventoryError, OpenContainer, window_type};
use ember_protocol::client::play::{CBlockEvent, LevelSound};
use ember_util::math::position::BlockPos;

use crate::world::World;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ChestState {
    IsOpened,
    IsClosed,
}

/// A single chest. Everyone looking at the chest's chunk sees the lid open when
/// the first viewer opens it and close when the last one leaves.
pub struct ChestBlock;

impl ChestBlock {
    pub const SIZE: usize = 27;
    pub const NAME: &'static str = "Chest";
    pub const NETWORK_TYPE: window_type::WindowType = window_type::CONTAINER;

    #[must_use]
    pub fn container(location: BlockPos) -> OpenContainer {
        OpenContainer::new(location, Self::SIZE, Self::NAME)
    }

    pub async fn open(&self, world: &World, container: &mut OpenContainer, viewer: i32) {
        let newly_added = container.add_viewer(viewer);
        if newly_added && container.viewer_count() == 1 {
            log::debug!("Chest at {} opened by {viewer}", container.location());
            self.play_chest_action(world, container.location(), ChestState::IsOpened)
                .await;
        }
    }

    /// Removes `viewer`, shutting the lid first if they were the last one.
    pub async fn close(
        &self,
        world: &World,
        container: &mut OpenContainer,
        viewer: i32,
    ) -> Result<(), InventoryError> {
        if container.viewer_count() == 1 && container.has_viewer(viewer) {
            self.play_chest_action(world, container.location(), ChestState::IsClosed)
                .await;
        }
        container.remove_viewer(viewer)
    }

    pub async fn play_chest_action(&self, world: &World, location: BlockPos, state: ChestState) {
        let (open, sound) = match state {
            ChestState::IsOpened => (true, LevelSound::ChestOpen),
            ChestState::IsClosed => (false, LevelSound::ChestClosed),
        };
        world
            .add_chunk_packet(
                location.chunk_coordinate(),
                &CBlockEvent::chest_lid(location, open),
            )
            .await;
        world.play_block_sound(sound, location).await;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use bytes::Bytes;
    use ember_protocol::packet::clientbound::{BLOCK_EVENT, LEVEL_SOUND_EVENT};
    use ember_util::math::vector2::Vector2;
    use tokio::sync::mpsc::Receiver;

    use super::*;
    use crate::net::Client;

    fn drain(recv: &mut Receiver<Bytes>) -> Vec<Bytes> {
        let mut packets = Vec::new();
        while let Ok(packet) = recv.try_recv() {
            packets.push(packet);
        }
        packets
    }

    async fn setup() -> (World, Arc<Client>, Receiver<Bytes>, OpenContainer) {
        let world = World::new();
        let (client, recv) = Client::new(7);
        let client = Arc::new(client);
        let location = BlockPos::new(-20, 64, 35);
        world
            .add_chunk_observer(location.chunk_coordinate(), client.clone())
            .await;
        (world, client, recv, ChestBlock::container(location))
    }

    #[tokio::test]
    async fn first_open_and_last_close_signal_once() {
        let (world, _client, mut recv, mut container) = setup().await;

        ChestBlock.open(&world, &mut container, 1).await;
        let packets = drain(&mut recv);
        assert_eq!(packets.len(), 2);
        assert_eq!(u32::from(packets[0][0]), BLOCK_EVENT);
        // x -20, y 64, z 35, event type 1, data 1
        assert_eq!(&packets[0][1..], [0x27, 0x40, 0x46, 0x02, 0x02]);
        assert_eq!(u32::from(packets[1][0]), LEVEL_SOUND_EVENT);
        assert_eq!(packets[1][1], LevelSound::ChestOpen as u8);
        assert_eq!(&packets[1][2..6], (-19.5f32).to_le_bytes());

        // More viewers come and go without touching the lid
        ChestBlock.open(&world, &mut container, 2).await;
        ChestBlock.open(&world, &mut container, 1).await;
        ChestBlock.close(&world, &mut container, 2).await.unwrap();
        assert!(drain(&mut recv).is_empty());
        assert_eq!(container.viewer_count(), 1);

        ChestBlock.close(&world, &mut container, 1).await.unwrap();
        let packets = drain(&mut recv);
        assert_eq!(packets.len(), 2);
        assert_eq!(packets[0].last(), Some(&0x00));
        assert_eq!(packets[1][1], LevelSound::ChestClosed as u8);
        assert_eq!(container.viewer_count(), 0);
    }

    #[tokio::test]
    async fn closing_without_viewing_is_an_error() {
        let (world, _client, mut recv, mut container) = setup().await;

        assert_eq!(
            ChestBlock.close(&world, &mut container, 3).await,
            Err(InventoryError::ClosedContainerInteract(3))
        );
        assert!(drain(&mut recv).is_empty());

        ChestBlock.open(&world, &mut container, 1).await;
        drain(&mut recv);
        assert!(ChestBlock.close(&world, &mut container, 3).await.is_err());
        assert!(drain(&mut recv).is_empty());
        assert!(container.has_viewer(1));
    }

    #[tokio::test]
    async fn observers_of_other_chunks_see_nothing() {
        let (world, _client, _recv, mut container) = setup().await;
        let (far, mut far_recv) = Client::new(8);
        world
            .add_chunk_observer(Vector2::new(10, 10), Arc::new(far))
            .await;

        ChestBlock.open(&world, &mut container, 1).await;
        assert!(drain(&mut far_recv).is_empty());
    }

    #[test]
    fn chest_container_defaults() {
        let container = ChestBlock::container(BlockPos::new(1, 2, 3));
        assert_eq!(container.size(), 27);
        assert_eq!(container.name(), "Chest");
        assert_eq!(container.location(), BlockPos::new(1, 2, 3));
        assert_eq!(ChestBlock::NETWORK_TYPE, 0);
        assert_ne!(ChestBlock::NETWORK_TYPE, window_type::INVENTORY);
    }
}
