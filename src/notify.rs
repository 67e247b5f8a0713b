use std::collections::VecDeque;

/// Toasts kept on screen at once; older ones are dropped first.
pub const VISIBLE_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: Variant,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: Variant::Default,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: Variant::Destructive,
        }
    }

    pub fn is_error(&self) -> bool {
        self.variant == Variant::Destructive
    }
}

#[derive(Debug, Clone, Default)]
pub struct Notifications {
    next_id: u64,
    items: VecDeque<(u64, Notification)>,
}

impl Notifications {
    pub fn push(&mut self, notification: Notification) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push_back((id, notification));
        while self.items.len() > VISIBLE_LIMIT {
            self.items.pop_front();
        }
        id
    }

    /// Dismissing an id that already went away is a no-op.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|(i, _)| *i != id);
    }

    pub fn iter(&self) -> impl Iterator<Item = &(u64, Notification)> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut n = Notifications::default();
        let a = n.push(Notification::info("a", "first"));
        let b = n.push(Notification::error("b", "second"));
        assert_ne!(a, b);
        assert_eq!(n.len(), 2);

        n.dismiss(a);
        let left = n.iter().map(|(_, x)| x.title.as_str()).collect::<Vec<_>>();
        assert_eq!(left, vec!["b"]);
        assert!(n.iter().next().unwrap().1.is_error());

        n.dismiss(a);
        assert_eq!(n.len(), 1);
        n.dismiss(b);
        assert!(n.is_empty());
    }

    #[test]
    fn test_oldest_dropped_past_limit() {
        let mut n = Notifications::default();
        for i in 0..5 {
            n.push(Notification::info(format!("{i}"), ""));
        }
        let titles = n.iter().map(|(_, x)| x.title.clone()).collect::<Vec<_>>();
        assert_eq!(titles, vec!["2", "3", "4"]);
    }
}
