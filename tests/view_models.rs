mod common;

use std::time::Duration;

use tokio::time::timeout;
use wonderfluff::catalog::{PuppyId, PuppyRecord};
use wonderfluff::viewmodel::{PuppyDetailViewModel, PuppyListViewModel, ShuffleMode};

const WAIT: Duration = Duration::from_secs(2);

async fn published_list(vm: &PuppyListViewModel) -> Vec<PuppyRecord> {
    let mut rx = vm.subscribe();
    let records = timeout(WAIT, rx.wait_for(|records| !records.is_empty()))
        .await
        .expect("list published in time")
        .expect("view-model alive")
        .clone();
    records
}

fn sorted_ids(records: &[PuppyRecord]) -> Vec<u32> {
    let mut ids: Vec<u32> = records.iter().map(|p| p.id.0).collect();
    ids.sort_unstable();
    ids
}

#[tokio::test]
async fn list_publishes_whole_catalog() {
    let vm = PuppyListViewModel::new(common::store(), ShuffleMode::Random);
    let records = published_list(&vm).await;
    assert_eq!(sorted_ids(&records), (1..=12).collect::<Vec<_>>());
    assert_eq!(vm.records().len(), 12);
}

#[tokio::test]
async fn two_instances_publish_permutations_of_the_same_set() {
    let a = PuppyListViewModel::new(common::store(), ShuffleMode::Random);
    let b = PuppyListViewModel::new(common::store(), ShuffleMode::Random);
    let first = published_list(&a).await;
    let second = published_list(&b).await;
    assert_eq!(sorted_ids(&first), sorted_ids(&second));
}

#[tokio::test]
async fn seeded_shuffle_is_reproducible() {
    let a = PuppyListViewModel::new(common::store(), ShuffleMode::Seeded(42));
    let b = PuppyListViewModel::new(common::store(), ShuffleMode::Seeded(42));
    assert_eq!(published_list(&a).await, published_list(&b).await);
}

#[tokio::test]
async fn load_adopt_reset_scenario() {
    let vm = PuppyDetailViewModel::new(common::store());
    let mut record = vm.subscribe_record();
    let mut adopted = vm.subscribe_adopted();
    let mut reset = vm.subscribe_reset();

    vm.load_puppy(PuppyId(7));
    let yodaag = timeout(WAIT, record.wait_for(Option::is_some))
        .await
        .expect("lookup in time")
        .expect("view-model alive")
        .expect("puppy 7 exists");
    assert_eq!(yodaag.name, "Yodaag");
    assert!(!*adopted.borrow());

    vm.adopt(yodaag.id);
    timeout(WAIT, adopted.wait_for(|v| *v))
        .await
        .expect("adopted in time")
        .expect("view-model alive");
    assert!(!*reset.borrow());

    vm.reset();
    timeout(WAIT, reset.wait_for(|v| *v))
        .await
        .expect("reset in time")
        .expect("view-model alive");
    // Adoption is cleared before reset is raised.
    assert!(!*adopted.borrow_and_update());
}

#[tokio::test]
async fn unknown_id_stays_absent() {
    let vm = PuppyDetailViewModel::new(common::store());
    let mut record = vm.subscribe_record();
    vm.load_puppy(PuppyId(999));

    timeout(WAIT, record.changed())
        .await
        .expect("lookup in time")
        .expect("view-model alive");
    assert_eq!(*record.borrow_and_update(), None);
}

#[tokio::test]
async fn later_lookup_replaces_earlier_one() {
    let vm = PuppyDetailViewModel::new(common::store());
    let mut record = vm.subscribe_record();
    vm.load_puppy(PuppyId(1));
    vm.load_puppy(PuppyId(2));

    let monica = *timeout(
        WAIT,
        record.wait_for(|r| r.map(|p| p.id) == Some(PuppyId(2))),
    )
    .await
    .expect("second lookup in time")
    .expect("view-model alive");
    assert_eq!(monica.map(|p| p.name), Some("Monica"));
}

#[tokio::test]
async fn cancelled_scope_drops_later_work() {
    let vm = PuppyDetailViewModel::new(common::store());
    let record = vm.subscribe_record();
    vm.scope().cancel();
    vm.load_puppy(PuppyId(1));

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(vm.scope().is_cancelled());
    assert!(!record.has_changed().unwrap_or(true));
}
