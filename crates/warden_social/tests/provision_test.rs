//! Panel provisioning behavior against a mock gateway.

mod common;

use common::MockGateway;
use serenity::model::id::{ChannelId, UserId};
use std::sync::Arc;
use warden_core::{appeal_panel, verify_panel};
use warden_social::{PanelProvisioner, ProvisionOutcome};

const BOT: UserId = UserId::new(99);
const VERIFY_CHANNEL: ChannelId = ChannelId::new(100);
const APPEALS_CHANNEL: ChannelId = ChannelId::new(200);

#[tokio::test]
async fn fresh_channel_gets_a_panel() {
    let gateway = Arc::new(MockGateway::new(BOT));
    let provisioner = PanelProvisioner::new(gateway.clone(), BOT);

    let outcome = provisioner
        .ensure_panel(VERIFY_CHANNEL, &verify_panel())
        .await
        .unwrap();

    assert_eq!(outcome, ProvisionOutcome::Posted);
    let posted = gateway.posted();
    assert_eq!(posted.len(), 1);
    assert_eq!(posted[0].0, VERIFY_CHANNEL);
    assert_eq!(posted[0].1.button_id, "verify_btn");
}

#[tokio::test]
async fn second_run_does_not_duplicate_the_panel() {
    let gateway = Arc::new(MockGateway::new(BOT));
    let provisioner = PanelProvisioner::new(gateway.clone(), BOT);
    let panel = verify_panel();

    let first = provisioner.ensure_panel(VERIFY_CHANNEL, &panel).await.unwrap();
    let second = provisioner.ensure_panel(VERIFY_CHANNEL, &panel).await.unwrap();

    assert_eq!(first, ProvisionOutcome::Posted);
    assert_eq!(second, ProvisionOutcome::AlreadyPresent);
    assert_eq!(gateway.posted().len(), 1);
}

#[tokio::test]
async fn existing_bot_message_suppresses_posting() {
    let gateway = Arc::new(
        MockGateway::new(BOT).with_authors(VERIFY_CHANNEL, vec![UserId::new(7), BOT]),
    );
    let provisioner = PanelProvisioner::new(gateway.clone(), BOT);

    let outcome = provisioner
        .ensure_panel(VERIFY_CHANNEL, &verify_panel())
        .await
        .unwrap();

    assert_eq!(outcome, ProvisionOutcome::AlreadyPresent);
    assert!(gateway.posted().is_empty());
}

#[tokio::test]
async fn foreign_chatter_does_not_count_as_a_panel() {
    let gateway = Arc::new(MockGateway::new(BOT).with_authors(
        VERIFY_CHANNEL,
        vec![UserId::new(1), UserId::new(2), UserId::new(3)],
    ));
    let provisioner = PanelProvisioner::new(gateway.clone(), BOT);

    let outcome = provisioner
        .ensure_panel(VERIFY_CHANNEL, &verify_panel())
        .await
        .unwrap();

    assert_eq!(outcome, ProvisionOutcome::Posted);
}

#[tokio::test]
async fn unreachable_channel_does_not_block_the_rest() {
    let gateway = Arc::new(MockGateway::new(BOT).with_unreachable(VERIFY_CHANNEL));
    let provisioner = PanelProvisioner::new(gateway.clone(), BOT);

    // Must not panic or abort on the unreachable first target.
    provisioner
        .provision_all(&[
            (VERIFY_CHANNEL, verify_panel()),
            (APPEALS_CHANNEL, appeal_panel()),
        ])
        .await;

    let posted = gateway.posted();
    assert_eq!(posted.len(), 1);
    assert_eq!(posted[0].0, APPEALS_CHANNEL);
    assert_eq!(posted[0].1.button_id, "appeal_btn");
}
