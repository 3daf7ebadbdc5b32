use std::sync::mpsc::{channel, Receiver, Sender};

/// Handle identifying one subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Receiving end handed to a subscriber
#[derive(Debug)]
pub struct Subscription {
    pub id: SubscriptionId,
    receiver: Receiver<i64>,
}

impl Subscription {
    /// Drain every reward delivered since the last call, in publish order
    pub fn drain(&self) -> Vec<i64> {
        self.receiver.try_iter().collect()
    }
}

/// Publish/subscribe hub for reward grants (e.g. a completed rewarded ad)
#[derive(Debug, Default)]
pub struct RewardChannel {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Sender<i64>)>,
}

impl RewardChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self) -> Subscription {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        let (sender, receiver) = channel();
        self.subscribers.push((id, sender));
        Subscription { id, receiver }
    }

    /// Returns false when `id` was not subscribed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Deliver `amount` to every live subscriber, returns how many received it
    pub fn publish(&mut self, amount: i64) -> usize {
        log::info!("Reward published: {}", amount);
        // Subscribers whose receiver was dropped are pruned here
        self.subscribers
            .retain(|(_, sender)| sender.send(amount).is_ok());
        self.subscribers.len()
    }
}
