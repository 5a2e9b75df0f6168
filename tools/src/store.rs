//! SQLite report store.
//!
//! RULE: Only store.rs talks to the database.
//! The runner hands it finished StaffingResult records; nothing is read back
//! into the calculator.

use rusqlite::{params, Connection, OpenFlags};
use serde::Serialize;
use staffing_core::StaffingResult;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// A persisted result row, flattened for reporting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoredResult {
    pub label:                  String,
    pub calls_per_hour:         f64,
    pub aht_minutes:            f64,
    pub target_pct:             f64,
    pub target_seconds:         f64,
    pub traffic_intensity:      f64,
    pub required_agents:        u32,
    pub required_fte:           u32,
    pub achieved_service_level: f64,
    pub occupancy:              f64,
    pub shrinkage_pct:          f64,
}

pub struct ReportStore {
    conn: Connection,
}

impl ReportStore {
    /// Open (or create) the report database at `path`. Accepts SQLite URIs.
    pub fn open(path: &str) -> StoreResult<Self> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_URI,
        )?;
        // WAL only matters for real files; in-memory databases ignore it.
        let _ = conn.execute_batch("PRAGMA journal_mode=WAL;");
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    pub fn migrate(&self) -> StoreResult<()> {
        self.conn
            .execute_batch(include_str!("../migrations/001_reports.sql"))?;
        Ok(())
    }

    // ── Run ────────────────────────────────────────────────────

    pub fn insert_run(&self, run_id: &str, version: &str, created_at: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO run (run_id, version, created_at) VALUES (?1, ?2, ?3)",
            params![run_id, version, created_at],
        )?;
        Ok(())
    }

    // ── Results ────────────────────────────────────────────────

    pub fn insert_result(&self, run_id: &str, label: &str, result: &StaffingResult) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO staffing_result (
                run_id, label, calls_per_hour, aht_minutes, target_pct, target_seconds,
                traffic_intensity, required_agents, required_fte,
                achieved_service_level, occupancy, shrinkage_pct
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            params![
                run_id,
                label,
                result.calls_per_hour,
                result.aht_minutes,
                result.target.target_pct(),
                result.target.target_seconds(),
                result.traffic_intensity,
                result.required_agents,
                result.required_fte,
                result.achieved_service_level,
                result.occupancy,
                result.shrinkage_pct,
            ],
        )?;
        Ok(())
    }

    pub fn result_count(&self, run_id: &str) -> StoreResult<i64> {
        let count = self.conn.query_row(
            "SELECT COUNT(*) FROM staffing_result WHERE run_id = ?1",
            params![run_id],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    pub fn results_for_run(&self, run_id: &str) -> StoreResult<Vec<StoredResult>> {
        let mut stmt = self.conn.prepare(
            "SELECT label, calls_per_hour, aht_minutes, target_pct, target_seconds,
                    traffic_intensity, required_agents, required_fte,
                    achieved_service_level, occupancy, shrinkage_pct
             FROM staffing_result WHERE run_id = ?1
             ORDER BY id ASC",
        )?;
        let rows = stmt
            .query_map(params![run_id], |row| {
                Ok(StoredResult {
                    label:                  row.get(0)?,
                    calls_per_hour:         row.get(1)?,
                    aht_minutes:            row.get(2)?,
                    target_pct:             row.get(3)?,
                    target_seconds:         row.get(4)?,
                    traffic_intensity:      row.get(5)?,
                    required_agents:        row.get(6)?,
                    required_fte:           row.get(7)?,
                    achieved_service_level: row.get(8)?,
                    occupancy:              row.get(9)?,
                    shrinkage_pct:          row.get(10)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}
