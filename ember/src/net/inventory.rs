use async_trait::async_trait;
use ember_config::advanced_config;
use ember_inventory::InventoryError;
use ember_protocol::server::play::SInventoryTransaction;

use super::Client;

/// Applies decoded transactions to real inventories.
#[async_trait]
pub trait TransactionExecutor: Send + Sync {
    /// Checks that items going in match items going out and applies every
    /// action, or none of them.
    async fn execute(
        &self,
        client: &Client,
        transaction: SInventoryTransaction,
    ) -> Result<(), InventoryError>;
}

impl Client {
    /// Decodes an inventory transaction and hands it to `executor`.
    ///
    /// A packet that doesn't decode means a broken or hostile client, which is
    /// kicked with the decode error as the reason. A transaction the executor
    /// refuses is only logged; the client resyncs its inventory on its own.
    pub async fn handle_inventory_transaction(
        &self,
        payload: &[u8],
        executor: &dyn TransactionExecutor,
    ) {
        let config = &advanced_config().inventory;

        let transaction =
            match SInventoryTransaction::read_bounded(payload, config.max_transaction_actions) {
                Ok(transaction) => transaction,
                Err(err) => {
                    log::warn!(
                        "Client {} sent an invalid inventory transaction: {}",
                        self.id,
                        err
                    );
                    self.kick(&err.to_string()).await;
                    return;
                }
            };

        if config.log_transactions {
            log::debug!(
                "Client {} sent a {:?} transaction with {} action(s)",
                self.id,
                transaction.transaction_type(),
                transaction.actions.len()
            );
            for action in &transaction.actions {
                log::debug!("  {action}");
            }
        }

        if let Err(err) = executor.execute(self, transaction).await {
            log::debug!(
                "Inventory transaction from client {} was rejected: {}",
                self.id,
                err
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ember_config::{AdvancedConfiguration, InventoryConfig, override_config_for_testing};
    use ember_inventory::{InventoryAction, ItemStack, container_id};
    use ember_protocol::{
        VarInt,
        codec::var_uint::VarUInt,
        server::play::{TransactionData, TransactionType},
        ser::NetworkWriteExt,
    };
    use tokio::sync::Mutex;

    #[derive(Default)]
    struct RecordingExecutor {
        received: Mutex<Vec<SInventoryTransaction>>,
        reject: bool,
    }

    #[async_trait]
    impl TransactionExecutor for RecordingExecutor {
        async fn execute(
            &self,
            _client: &Client,
            transaction: SInventoryTransaction,
        ) -> Result<(), InventoryError> {
            self.received.lock().await.push(transaction);
            if self.reject {
                Err(InventoryError::UnbalancedTransaction(
                    "one item in, two out".to_string(),
                ))
            } else {
                Ok(())
            }
        }
    }

    /// A normal transaction moving one item into `slots` main inventory slots.
    fn normal_transaction(transaction_type: u32, slots: &[u32]) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.write_var_uint(&VarUInt(transaction_type)).unwrap();
        buf.write_var_uint(&VarUInt(slots.len() as u32)).unwrap();
        for slot in slots {
            buf.write_var_uint(&VarUInt(0)).unwrap();
            buf.write_var_int(&VarInt(container_id::INVENTORY)).unwrap();
            buf.write_var_uint(&VarUInt(*slot)).unwrap();
            buf.write_item_stack(&ItemStack::EMPTY).unwrap();
            buf.write_item_stack(&ItemStack::new(1, 1)).unwrap();
        }
        buf
    }

    fn with_limit(max_transaction_actions: usize) {
        override_config_for_testing(AdvancedConfiguration {
            inventory: InventoryConfig {
                max_transaction_actions,
                log_transactions: true,
            },
            ..Default::default()
        });
    }

    #[tokio::test]
    async fn valid_transaction_reaches_executor() {
        with_limit(InventoryConfig::DEFAULT_MAX_TRANSACTION_ACTIONS);
        let (client, mut recv) = Client::new(1);
        let executor = RecordingExecutor::default();

        client
            .handle_inventory_transaction(&normal_transaction(0, &[9]), &executor)
            .await;

        assert!(!client.is_closed());
        assert!(recv.try_recv().is_err());
        let received = executor.received.lock().await;
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].transaction_type(), TransactionType::Normal);
        assert_eq!(received[0].data, TransactionData::Normal);
        assert_eq!(
            received[0].actions,
            vec![InventoryAction::SlotChange {
                source_item: ItemStack::EMPTY,
                target_item: ItemStack::new(1, 1),
                window_id: container_id::INVENTORY,
                slot: 9,
            }]
        );
    }

    #[tokio::test]
    async fn malformed_transaction_kicks() {
        with_limit(InventoryConfig::DEFAULT_MAX_TRANSACTION_ACTIONS);
        let (client, mut recv) = Client::new(2);
        let executor = RecordingExecutor::default();

        client
            .handle_inventory_transaction(&normal_transaction(255, &[0, 1]), &executor)
            .await;

        assert!(client.is_closed());
        assert!(executor.received.lock().await.is_empty());
        let disconnect = recv.try_recv().unwrap();
        assert_eq!(disconnect[0], 0x05);
        assert!(disconnect.ends_with(b"unexpected transaction type 255"));
    }

    #[tokio::test]
    async fn configured_action_limit() {
        with_limit(1);
        let (client, _recv) = Client::new(3);
        let executor = RecordingExecutor::default();

        client
            .handle_inventory_transaction(&normal_transaction(0, &[0, 1]), &executor)
            .await;

        assert!(client.is_closed());
        assert!(executor.received.lock().await.is_empty());
    }

    #[tokio::test]
    async fn rejected_transaction_keeps_connection() {
        with_limit(InventoryConfig::DEFAULT_MAX_TRANSACTION_ACTIONS);
        let (client, mut recv) = Client::new(4);
        let executor = RecordingExecutor {
            reject: true,
            ..Default::default()
        };

        client
            .handle_inventory_transaction(&normal_transaction(1, &[3]), &executor)
            .await;

        assert!(!client.is_closed());
        assert!(recv.try_recv().is_err());
        assert_eq!(executor.received.lock().await.len(), 1);
    }
}
