//! Default rows for a freshly started server.

use super::DbResult;
use log::info;
use rusqlite::{params, Connection};

/// Lists inserted by [`seed_default_lists`], as `(id, name)` pairs.
pub const DEFAULT_LISTS: &[(i64, &str)] = &[(1, "List 1"), (2, "List 2")];

/// Inserts [`DEFAULT_LISTS`] rows that are not present yet.
///
/// Existing rows with the same ids are left untouched, so seeding an already
/// populated database is a no-op. Returns the number of inserted lists.
pub fn seed_default_lists(conn: &mut Connection) -> DbResult<usize> {
    let tx = conn.transaction()?;
    let mut inserted = 0;
    for (id, name) in DEFAULT_LISTS {
        inserted += tx.execute(
            "INSERT OR IGNORE INTO todo_lists (id, name) VALUES (?1, ?2);",
            params![id, name],
        )?;
    }
    tx.commit()?;

    info!("event=db_seed module=db status=ok inserted={inserted}");
    Ok(inserted)
}
