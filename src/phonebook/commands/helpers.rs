use crate::error::Result;
use crate::model::{Contact, Identifier};
use crate::store::DataStore;

/// Looks up `id` and pairs it with its record.
pub fn contact_by_id<S: DataStore>(store: &S, id: &Identifier) -> Result<Contact> {
    let record = store.get(id)?;
    Ok(Contact::new(id.clone(), record))
}

/// All contacts whose key or record satisfies `pred`.
pub fn filter_contacts<S, F>(store: &S, pred: F) -> Vec<Contact>
where
    S: DataStore,
    F: Fn(&Contact) -> bool,
{
    store.list().into_iter().filter(|c| pred(c)).collect()
}
