use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use bytes::Bytes;
use ember_protocol::{
    ClientPacket, RawPacket, client::play::CDisconnect,
    packet::serverbound::INVENTORY_TRANSACTION,
};
use tokio::sync::{
    Notify,
    mpsc::{Receiver, Sender},
};

mod inventory;

pub use inventory::TransactionExecutor;

/// Capacity of the outgoing packet queue of one client.
pub(crate) const OUTGOING_QUEUE_SIZE: usize = 128;

/// A connected Bedrock client, seen from the game logic.
///
/// Packets are serialized right away and queued; the connection layer owns the
/// receiving end and writes them out in order.
pub struct Client {
    /// The client id. Only used to correlate log lines with a connection
    pub id: usize,
    /// Indicates if the client connection is closed.
    pub closed: AtomicBool,
    /// Triggered when this client is closed.
    close_interrupt: Arc<Notify>,
    outgoing_packet_queue_send: Sender<Bytes>,
}

impl Client {
    #[must_use]
    pub fn new(id: usize) -> (Self, Receiver<Bytes>) {
        let (send, recv) = tokio::sync::mpsc::channel(OUTGOING_QUEUE_SIZE);
        (
            Self {
                id,
                closed: AtomicBool::new(false),
                close_interrupt: Arc::new(Notify::new()),
                outgoing_packet_queue_send: send,
            },
            recv,
        )
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Relaxed)
    }

    /// Queues a clientbound packet. Queued packets reach the client in order.
    pub async fn enqueue_packet<P>(&self, packet: &P)
    where
        P: ClientPacket + Sync,
    {
        match packet.to_bytes() {
            Ok(packet_data) => self.enqueue_packet_data(packet_data).await,
            Err(err) => log::error!("Failed to serialize packet {}: {}", P::PACKET_ID, err),
        }
    }

    pub async fn enqueue_packet_data(&self, packet_data: Bytes) {
        if let Err(err) = self.outgoing_packet_queue_send.send(packet_data).await {
            // This is expected to fail if we are closed
            if !self.is_closed() {
                log::error!(
                    "Failed to add packet to the outgoing packet queue for client {}: {}",
                    self.id,
                    err
                );
            }
        }
    }

    /// Dispatches one play packet received from this client.
    pub async fn handle_play_packet(&self, executor: &dyn TransactionExecutor, packet: RawPacket) {
        match packet.id {
            INVENTORY_TRANSACTION => {
                self.handle_inventory_transaction(&packet.payload, executor)
                    .await;
            }
            id => log::debug!("Client {} sent unhandled play packet {id:#x}", self.id),
        }
    }

    /// Sends a disconnect screen with `reason` and closes the connection.
    pub async fn kick(&self, reason: &str) {
        if self.is_closed() {
            return;
        }
        self.enqueue_packet(&CDisconnect::new(reason)).await;
        log::debug!("Closing connection for {}", self.id);
        self.close();
    }

    pub fn close(&self) {
        self.closed.store(true, Ordering::Relaxed);
        self.close_interrupt.notify_waiters();
    }

    /// Resolves once [`Client::close`] has been called.
    pub async fn await_close_interrupt(&self) {
        let notified = self.close_interrupt.notified();
        if self.is_closed() {
            return;
        }
        notified.await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn kick_sends_disconnect_and_closes() {
        let (client, mut recv) = Client::new(3);
        client.kick("bad packet").await;

        assert!(client.is_closed());
        let packet = recv.try_recv().unwrap();
        assert_eq!(packet[0], 0x05);
        assert!(packet.ends_with(b"bad packet"));

        // A second kick doesn't queue anything
        client.kick("again").await;
        assert!(recv.try_recv().is_err());
    }

    #[tokio::test]
    async fn close_wakes_waiters() {
        let (client, _recv) = Client::new(1);
        let client = Arc::new(client);

        let waiter = {
            let client = client.clone();
            tokio::spawn(async move { client.await_close_interrupt().await })
        };
        tokio::task::yield_now().await;
        client.close();
        waiter.await.unwrap();

        // Already closed, returns right away
        client.await_close_interrupt().await;
    }

    #[tokio::test]
    async fn unknown_packets_are_ignored() {
        struct Unused;

        #[async_trait::async_trait]
        impl TransactionExecutor for Unused {
            async fn execute(
                &self,
                _client: &Client,
                _transaction: ember_protocol::server::play::SInventoryTransaction,
            ) -> Result<(), ember_inventory::InventoryError> {
                panic!("no transaction was sent");
            }
        }

        let (client, mut recv) = Client::new(1);
        client
            .handle_play_packet(
                &Unused,
                RawPacket {
                    id: 0x90,
                    payload: Bytes::from_static(&[1, 2, 3]),
                },
            )
            .await;
        assert!(!client.is_closed());
        assert!(recv.try_recv().is_err());
    }
}
