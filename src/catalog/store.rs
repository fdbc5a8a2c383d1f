use super::record::{Gender, ImageRef, PuppyId, PuppyRecord};

/// Number of records in the built-in catalog.
pub const CATALOG_SIZE: usize = 12;

/// Source of puppy records for view-models.
///
/// Lookups never fail: an unknown id is a normal `None`, not an error.
pub trait PuppyRepository: Send + Sync {
    /// All records in catalog order.
    fn list_all(&self) -> Vec<PuppyRecord>;

    /// The first record whose id matches, if any.
    fn find_by_id(&self, id: PuppyId) -> Option<PuppyRecord>;
}

/// Immutable in-memory catalog.
///
/// Every instance is a view over the same static table, so handing out
/// copies never duplicates or exposes mutable data.
#[derive(Debug, Clone, Copy)]
pub struct CatalogStore {
    records: &'static [PuppyRecord],
}

static SHARED: CatalogStore = CatalogStore { records: &PUPPIES };

impl CatalogStore {
    pub fn new() -> Self {
        Self { records: &PUPPIES }
    }

    /// The process-wide catalog instance.
    pub fn shared() -> &'static CatalogStore {
        &SHARED
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PuppyRepository for CatalogStore {
    fn list_all(&self) -> Vec<PuppyRecord> {
        self.records.to_vec()
    }

    fn find_by_id(&self, id: PuppyId) -> Option<PuppyRecord> {
        self.records.iter().find(|puppy| puppy.id == id).copied()
    }
}

const fn puppy(
    id: u32,
    image: &'static str,
    name: &'static str,
    traits: (f32, f32, f32),
    description: &'static str,
    gender: Option<Gender>,
) -> PuppyRecord {
    PuppyRecord {
        id: PuppyId(id),
        image: ImageRef(image),
        name,
        barkability: traits.0,
        cuddliness: traits.1,
        guardability: traits.2,
        description,
        gender,
    }
}

static PUPPIES: [PuppyRecord; CATALOG_SIZE] = [
    puppy(
        1,
        "puppy1",
        "Mr. Jacksen",
        (0.9, 0.5, 0.3),
        "A very classy, yet chilled pup. However, if his shirts are not perfectly made, he will back louder than you think. But other than that — the classiest of them all!",
        Some(Gender::Male),
    ),
    puppy(
        2,
        "puppy2",
        "Monica",
        (0.1, 1.0, 0.1),
        "No single person that saw Monica in real life ever said something different than \"Awww...\". She's very cuddleable, and never screams.",
        Some(Gender::Female),
    ),
    puppy(
        3,
        "puppy3",
        "Fat Plush",
        (0.8, 0.9, 0.5),
        "Legends say, his grand-dad was a lion. Fat plush has the fines furr, making him a perfect cuddle partner. But he can get wild — like a lion!",
        Some(Gender::Male),
    ),
    puppy(
        4,
        "puppy4",
        "Ice",
        (1.0, 0.2, 0.2),
        "If Ice sees the postman, you will better be in some other place! It is very other-worldly that a dog can bark this loud!",
        None,
    ),
    puppy(
        5,
        "puppy5",
        "Puppia",
        (0.2, 0.8, 0.2),
        "She likes to wear a dress with her name on it. Puppia, a small yet very-cuddleable tiny monster. You can not not like her!",
        Some(Gender::Female),
    ),
    puppy(
        6,
        "puppy6",
        "Frank",
        (0.9, 0.6, 0.3),
        "A cousin of Mr. Jackson. Similar to his cousin, he's a classy pup. But he rather likes to stay at home than run around with the other dogs in the park.",
        Some(Gender::Male),
    ),
    puppy(
        7,
        "puppy7",
        "Yodaag",
        (0.2, 0.2, 1.0),
        "When you look at the bark side, careful you must be. For the bark side looks back.",
        None,
    ),
    puppy(
        8,
        "puppy8",
        "Ice 2",
        (0.5, 0.2, 1.0),
        "Grown up in the wilderness, Ice 2 knows how to defend himself. We're still trying to make him people-friendly — if you are up for a challenge — Ice 2 is your best go.",
        Some(Gender::Male),
    ),
    puppy(
        9,
        "puppy9",
        "Mr. Chester",
        (0.3, 0.8, 0.3),
        "He likes to joke around from time to time. Stealing the food of his mates and always finding a way to get himself out of trouble.",
        Some(Gender::Male),
    ),
    puppy(
        10,
        "puppy10",
        "Dr. Snuffles",
        (0.1, 0.2, 0.2),
        "After studying countless owners, Dr. Snuffles likes to live on his own. However, he likes to be scratched and therefore looks for a new owner.",
        Some(Gender::Male),
    ),
    puppy(
        11,
        "puppy11",
        "T.J. Rash",
        (0.5, 0.2, 0.6),
        "If there is a party, T.J Rash is in the house. Some of the barkiest events turned out to be only because he was there.",
        Some(Gender::Male),
    ),
    puppy(
        12,
        "puppy12",
        "Bobby",
        (0.1, 1.0, 0.1),
        "Likes to sleep in, be cuddled, cuddles back, jumps around, awww. This dog is just too cute.",
        None,
    ),
];
