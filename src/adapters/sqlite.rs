use crate::domain::model::GeoRecord;
use crate::domain::ports::GeoStore;
use crate::utils::error::Result;
use rusqlite::{params, Connection};

/// Tag distinguishing this dataset from any future co-located dataset in
/// the same table.
const DATASET_TYPE: &str = "uszip";

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS geo_data (
    type     CHAR(10) NOT NULL,
    key      CHAR(10) NOT NULL,
    special  INTEGER NOT NULL,
    has_poly INTEGER NOT NULL,
    json     TEXT NOT NULL,
    PRIMARY KEY (type, key)
)";

/// Durable store for merged records, one scoped connection per run. The
/// connection is released on drop.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(path: &str) -> Result<Self> {
        Ok(Self {
            conn: Connection::open(path)?,
        })
    }
}

impl GeoStore for SqliteStore {
    fn ensure_schema(&self) -> Result<()> {
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    fn write(&self, code: &str, record: &GeoRecord) -> Result<()> {
        let json = serde_json::to_string(record)?;
        self.conn.execute(
            "INSERT OR REPLACE INTO geo_data (type, key, special, has_poly, json) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                DATASET_TYPE,
                code,
                record.undeliverable as i32,
                record.has_poly() as i32,
                json
            ],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Point;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> SqliteStore {
        let path = dir.path().join("test.db");
        SqliteStore::open(path.to_str().unwrap()).unwrap()
    }

    #[test]
    fn test_ensure_schema_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.ensure_schema().unwrap();
        store.ensure_schema().unwrap();
    }

    #[test]
    fn test_write_stores_flags_and_blob() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.ensure_schema().unwrap();

        let record = GeoRecord {
            name: Some("Factoria".to_string()),
            center: Some(Point::new("-122.14", "47.55")),
            poly: Some(vec![Point::with_alt("-122.15", "47.56", "0")]),
            undeliverable: false,
        };
        store.write("98006", &record).unwrap();

        let (special, has_poly, json): (i64, i64, String) = store
            .conn
            .query_row(
                "SELECT special, has_poly, json FROM geo_data WHERE type = 'uszip' AND key = '98006'",
                [],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .unwrap();

        assert_eq!(special, 0);
        assert_eq!(has_poly, 1);
        let stored: GeoRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(stored, record);
    }

    #[test]
    fn test_rewriting_a_code_upserts() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.ensure_schema().unwrap();

        let mut record = GeoRecord {
            name: Some("Unassigned".to_string()),
            undeliverable: true,
            ..GeoRecord::default()
        };
        store.write("00000", &record).unwrap();

        record.name = Some("Renamed".to_string());
        store.write("00000", &record).unwrap();

        let (count, json): (i64, String) = store
            .conn
            .query_row(
                "SELECT COUNT(*), MAX(json) FROM geo_data WHERE key = '00000'",
                [],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .unwrap();
        assert_eq!(count, 1);
        assert!(json.contains("Renamed"));
    }
}
