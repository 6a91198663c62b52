//! Entity types served by the admin API.

mod car;
mod contact;
mod filter;
mod page;
mod pay_history;
mod setting;
mod subscription;
mod tariff;
mod user;

pub use car::Car;
pub use contact::Contact;
pub use filter::Filter;
pub use page::{Page, PageMeta};
pub use pay_history::PayHistory;
pub use setting::Setting;
pub use subscription::Subscription;
pub use tariff::Tariff;
pub use user::User;

use crate::resource::Resource;

/// The dashboard tables, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Cars,
    Filters,
    Subscriptions,
    Tariffs,
    Contacts,
    Settings,
    Users,
    PayHistory,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 8] = [
        ResourceKind::Cars,
        ResourceKind::Filters,
        ResourceKind::Subscriptions,
        ResourceKind::Tariffs,
        ResourceKind::Contacts,
        ResourceKind::Settings,
        ResourceKind::Users,
        ResourceKind::PayHistory,
    ];

    /// Endpoint path, also the key under which the last page is remembered.
    pub fn path(self) -> &'static str {
        match self {
            ResourceKind::Cars => Car::PATH,
            ResourceKind::Filters => Filter::PATH,
            ResourceKind::Subscriptions => Subscription::PATH,
            ResourceKind::Tariffs => Tariff::PATH,
            ResourceKind::Contacts => Contact::PATH,
            ResourceKind::Settings => Setting::PATH,
            ResourceKind::Users => User::PATH,
            ResourceKind::PayHistory => PayHistory::PATH,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ResourceKind::Cars => Car::TITLE,
            ResourceKind::Filters => Filter::TITLE,
            ResourceKind::Subscriptions => Subscription::TITLE,
            ResourceKind::Tariffs => Tariff::TITLE,
            ResourceKind::Contacts => Contact::TITLE,
            ResourceKind::Settings => Setting::TITLE,
            ResourceKind::Users => User::TITLE,
            ResourceKind::PayHistory => PayHistory::TITLE,
        }
    }

    pub fn editable(self) -> bool {
        match self {
            ResourceKind::Cars => Car::EDITABLE,
            ResourceKind::Filters => Filter::EDITABLE,
            ResourceKind::Subscriptions => Subscription::EDITABLE,
            ResourceKind::Tariffs => Tariff::EDITABLE,
            ResourceKind::Contacts => Contact::EDITABLE,
            ResourceKind::Settings => Setting::EDITABLE,
            ResourceKind::Users => User::EDITABLE,
            ResourceKind::PayHistory => PayHistory::EDITABLE,
        }
    }

    pub fn filter_fields(self) -> &'static [&'static str] {
        match self {
            ResourceKind::Cars => Car::FILTER_FIELDS,
            ResourceKind::Filters => Filter::FILTER_FIELDS,
            ResourceKind::Subscriptions => Subscription::FILTER_FIELDS,
            ResourceKind::Tariffs => Tariff::FILTER_FIELDS,
            ResourceKind::Contacts => Contact::FILTER_FIELDS,
            ResourceKind::Settings => Setting::FILTER_FIELDS,
            ResourceKind::Users => User::FILTER_FIELDS,
            ResourceKind::PayHistory => PayHistory::FILTER_FIELDS,
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|k| *k == self).unwrap_or(0)
    }

    /// Next tab, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous tab, wrapping around.
    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}
