/// Every scope granted to a newly created key, in the order it is sent.
pub const MAIL_SEND_SCOPES: &[&str] = &[
    "mail.send",
    "mail.batch.create",
    "mail.batch.delete",
    "mail.batch.read",
    "mail.batch.update",
    "mail_settings.address_whitelist.read",
    "mail_settings.address_whitelist.update",
    "mail_settings.bcc.read",
    "mail_settings.bcc.update",
    "mail_settings.bounce_purge.read",
    "mail_settings.bounce_purge.update",
    "mail_settings.footer.read",
    "mail_settings.footer.update",
    "mail_settings.forward_bounce.read",
    "mail_settings.forward_bounce.update",
    "mail_settings.forward_spam.read",
    "mail_settings.forward_spam.update",
    "mail_settings.plain_content.read",
    "mail_settings.plain_content.update",
    "mail_settings.read",
    "mail_settings.spam_check.read",
    "mail_settings.spam_check.update",
    "mail_settings.template.read",
    "mail_settings.template.update",
    "user.scheduled_sends.create",
    "user.scheduled_sends.delete",
    "user.scheduled_sends.read",
    "user.scheduled_sends.update",
    "user.webhooks.event.settings.create",
    "user.webhooks.event.settings.read",
    "user.webhooks.event.settings.update",
    "user.webhooks.event.settings.delete",
    "user.webhooks.event.test.create",
    "user.webhooks.event.test.read",
    "user.webhooks.event.test.update",
];
