//! Webhook handlers.
//!
//! Verification and routing of inbound Notion facility webhooks.

mod notion_webhook_dispatcher;

pub use notion_webhook_dispatcher::NotionWebhookDispatcher;
