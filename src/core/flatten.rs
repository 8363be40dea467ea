use crate::domain::model::{BreedsPayload, FlattenedBreedList};

/// 將 `{ breed: [sub-breeds] }` 攤平成 `"<sub-breed> <breed>"` 或 `"<breed>"`
pub fn flatten_breeds(payload: &BreedsPayload) -> FlattenedBreedList {
    payload
        .entries()
        .iter()
        .fold(Vec::new(), |mut collector, (breed, sub_breeds)| {
            if sub_breeds.is_empty() {
                collector.push(breed.clone());
            } else {
                collector.extend(
                    sub_breeds
                        .iter()
                        .map(|sub_breed| format!("{} {}", sub_breed, breed)),
                );
            }
            collector
        })
}
