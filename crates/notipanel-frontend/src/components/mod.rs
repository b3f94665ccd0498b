pub mod notification_item;
