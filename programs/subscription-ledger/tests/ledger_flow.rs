use anchor_lang::prelude::Pubkey;
use subscription_ledger::{Ledger, Service, Subscription};

const PRICE: u64 = 1;
const NEW_PRICE: u64 = 2;
const PERIOD: i64 = 2_592_000;
const NOW: i64 = 1_750_000_000;

fn new_ledger() -> Ledger {
    Ledger {
        authority: Pubkey::new_unique(),
        service_count: 0,
        bump: 255,
    }
}

fn create_service(ledger: &mut Ledger, owner: Pubkey, price: u64, period: i64) -> Service {
    let id = ledger.allocate_service_id().unwrap();
    Service::new(id, owner, price, period, 255).unwrap()
}

fn empty_subscription(service_id: u64, subscriber: Pubkey) -> Subscription {
    let mut sub = Subscription {
        service_id: 0,
        subscriber: Pubkey::default(),
        expiry: 0,
        bump: 0,
    };
    sub.open_if_new(service_id, subscriber, 255);
    sub
}

fn subscribe(service: &mut Service, subscription: &mut Subscription, payment: u64, now: i64) {
    service.accept_payment(payment).unwrap();
    subscription.extend(now, service.period).unwrap();
}

#[test]
fn subscribe_extend_and_withdraw() {
    let mut ledger = new_ledger();
    let owner = Pubkey::new_unique();
    let alice = Pubkey::new_unique();

    let mut service = create_service(&mut ledger, owner, PRICE, PERIOD);
    assert_eq!(service.id, 0);

    let mut sub = empty_subscription(service.id, alice);
    assert!(!sub.is_active(NOW));

    subscribe(&mut service, &mut sub, PRICE, NOW);
    assert!(sub.is_active(NOW));
    assert_eq!(service.balance, 1);
    let first_expiry = sub.expiry;

    subscribe(&mut service, &mut sub, PRICE, NOW + 60);
    assert_eq!(sub.expiry, first_expiry + PERIOD);
    assert_eq!(service.balance, 2);

    service.authorize(&owner).unwrap();
    assert_eq!(service.take_balance(), 2);
    assert_eq!(service.balance, 0);
    assert_eq!(service.take_balance(), 0);
}

#[test]
fn service_ids_follow_creation_order() {
    let mut ledger = new_ledger();
    let owner = Pubkey::new_unique();

    let ids: Vec<u64> = (0..4)
        .map(|_| create_service(&mut ledger, owner, PRICE, PERIOD).id)
        .collect();
    assert_eq!(ids, vec![0, 1, 2, 3]);
}

#[test]
fn paused_service_keeps_existing_access() {
    let mut ledger = new_ledger();
    let owner = Pubkey::new_unique();
    let alice = Pubkey::new_unique();

    let mut service = create_service(&mut ledger, owner, PRICE, PERIOD);
    let mut sub = empty_subscription(service.id, alice);
    subscribe(&mut service, &mut sub, PRICE, NOW);
    let expiry = sub.expiry;

    service.authorize(&owner).unwrap();
    service.set_paused(true);

    assert!(service.accept_payment(PRICE).is_err());
    assert_eq!(service.balance, PRICE);
    assert_eq!(sub.expiry, expiry);
    assert!(sub.is_active(NOW + 1));

    service.set_paused(false);
    subscribe(&mut service, &mut sub, PRICE, NOW + 1);
    assert_eq!(sub.expiry, expiry + PERIOD);
}

#[test]
fn strangers_cannot_administer() {
    let mut ledger = new_ledger();
    let owner = Pubkey::new_unique();
    let mallory = Pubkey::new_unique();
    let service = create_service(&mut ledger, owner, PRICE, PERIOD);

    assert!(service.authorize(&mallory).is_err());
    assert!(!service.paused);
    assert_eq!(service.price, PRICE);
}

#[test]
fn price_change_and_gift() {
    let mut ledger = new_ledger();
    let owner = Pubkey::new_unique();
    let alice = Pubkey::new_unique();
    let bob = Pubkey::new_unique();

    let mut service = create_service(&mut ledger, owner, PRICE, PERIOD);
    let mut alice_sub = empty_subscription(service.id, alice);
    subscribe(&mut service, &mut alice_sub, PRICE, NOW);

    assert_eq!(service.set_price(NEW_PRICE), PRICE);
    assert!(service.accept_payment(PRICE).is_err());
    assert_eq!(alice_sub.expiry, NOW + PERIOD);

    let mut bob_sub = empty_subscription(service.id, bob);
    alice_sub.gift_to(&mut bob_sub, NOW).unwrap();

    assert_eq!(bob_sub.expiry, alice_sub.expiry);
    assert_eq!(alice_sub.expiry, NOW + PERIOD);
    assert!(bob_sub.is_active(NOW));
}
