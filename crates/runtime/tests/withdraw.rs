//! Withdrawal preparer tests over the mock signer.

use std::collections::BTreeMap;
use std::sync::Arc;

use rust_decimal::Decimal;

use farm_core::{ItemName, CATALOG};
use farm_runtime::{
    FarmDocument, GameStateDocument, InMemoryFarmRepository, MockChain, MockSigner, MockWallet,
    RuntimeConfig, SessionToken, WithdrawError, WithdrawPipeline, WithdrawRequest,
};

const FARMER: &str = "0xfarmer";
const FARM_ID: u64 = 11;

struct Harness {
    signer: MockSigner,
    session: SessionToken,
    pipeline: WithdrawPipeline,
}

fn harness() -> Harness {
    let repository = InMemoryFarmRepository::new();
    let chain = MockChain::new();
    let signer = MockSigner::new();
    let session = SessionToken::generate();

    repository.insert(FarmDocument {
        id: FARM_ID,
        address: FARMER.to_string(),
        session,
        game_state: GameStateDocument {
            balance: "0".to_string(),
            inventory: BTreeMap::new(),
            stock: BTreeMap::new(),
            fields: BTreeMap::new(),
            trees: BTreeMap::new(),
        },
    });
    chain.set_owner(FARM_ID, FARMER);

    let pipeline = WithdrawPipeline::new(
        Arc::new(repository),
        Arc::new(chain),
        Arc::new(signer.clone()),
        Arc::new(MockWallet::accepting()),
        RuntimeConfig::testnet(),
    );

    Harness {
        signer,
        session,
        pipeline,
    }
}

fn request(session: SessionToken, sfl: Decimal, ids: Vec<u32>, amounts: Vec<&str>) -> WithdrawRequest {
    WithdrawRequest {
        farm_id: FARM_ID,
        session_id: session,
        sender: FARMER.to_string(),
        signature: "0xsig".to_string(),
        sfl,
        ids,
        amounts: amounts.into_iter().map(str::to_string).collect(),
    }
}

#[tokio::test]
async fn bundles_tax_and_relays_the_signature() {
    let harness = harness();
    let wood_id = CATALOG.id_of(ItemName::Wood);

    let bundle = harness
        .pipeline
        .prepare(request(
            harness.session,
            Decimal::new(50, 0),
            vec![wood_id],
            vec!["3"],
        ))
        .await
        .unwrap();

    assert_eq!(bundle.signature, "0xmocked-withdraw-signature");

    let requests = harness.signer.requests();
    assert_eq!(requests.len(), 1);
    let payload = &requests[0];
    assert_eq!(payload.sender, FARMER);
    assert_eq!(payload.farm_id, FARM_ID);
    assert_eq!(payload.session_id, harness.session);
    assert_eq!(payload.ids, vec![wood_id]);
    assert_eq!(payload.amounts, vec!["3".to_string()]);
    // 50 SFL lands in the 25% bracket.
    assert_eq!(payload.tax, 2_500);
}

#[tokio::test]
async fn empty_withdrawal_still_consumes_a_signature() {
    let harness = harness();

    let bundle = harness
        .pipeline
        .prepare(request(harness.session, Decimal::ZERO, vec![], vec![]))
        .await
        .unwrap();

    assert!(!bundle.signature.is_empty());
    assert_eq!(harness.signer.requests().len(), 1);
}

#[tokio::test]
async fn non_withdrawable_items_are_rejected() {
    let harness = harness();
    let crop_id = CATALOG.id_of(ItemName::Sunflower);

    let error = harness
        .pipeline
        .prepare(request(
            harness.session,
            Decimal::ZERO,
            vec![crop_id],
            vec!["1"],
        ))
        .await
        .unwrap_err();
    assert_eq!(error, WithdrawError::NotWithdrawable(ItemName::Sunflower));
    assert!(harness.signer.requests().is_empty());
}

#[tokio::test]
async fn unknown_ids_are_rejected() {
    let harness = harness();

    let error = harness
        .pipeline
        .prepare(request(harness.session, Decimal::ZERO, vec![9_999], vec!["1"]))
        .await
        .unwrap_err();
    assert_eq!(error, WithdrawError::UnknownItem(9_999));
}

#[tokio::test]
async fn mismatched_lengths_are_rejected() {
    let harness = harness();
    let wood_id = CATALOG.id_of(ItemName::Wood);

    let error = harness
        .pipeline
        .prepare(request(
            harness.session,
            Decimal::ZERO,
            vec![wood_id],
            vec![],
        ))
        .await
        .unwrap_err();
    assert_eq!(error, WithdrawError::LengthMismatch);
}

#[tokio::test]
async fn foreign_sender_cannot_withdraw() {
    let harness = harness();

    let mut foreign = request(harness.session, Decimal::ZERO, vec![], vec![]);
    foreign.sender = "0xsomeoneelse".to_string();
    let error = harness.pipeline.prepare(foreign).await.unwrap_err();
    assert_eq!(error, WithdrawError::NotOwner);
}

#[tokio::test]
async fn unknown_farm_cannot_withdraw() {
    let harness = harness();

    let mut missing = request(harness.session, Decimal::ZERO, vec![], vec![]);
    missing.farm_id = 404;
    let error = harness.pipeline.prepare(missing).await.unwrap_err();
    assert_eq!(error, WithdrawError::FarmNotFound);
}
