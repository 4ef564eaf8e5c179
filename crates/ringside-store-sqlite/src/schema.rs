//! SQL schema for the Ringside SQLite store.
//!
//! Executed once at connection startup. Every entity table has the same
//! shape: the record is stored whole as JSON, keyed by id and scoped by
//! owner. Ids are unique per owner, so one owner's export can be imported
//! by another. Derived views (calendar occurrences, current champion) are never
//! stored.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS wrestlers (
    id          TEXT NOT NULL,
    owner_id    TEXT NOT NULL,
    data        TEXT NOT NULL,   -- JSON-encoded Wrestler
    created_at  TEXT NOT NULL,   -- ISO 8601 UTC
    updated_at  TEXT NOT NULL,
    PRIMARY KEY (owner_id, id)
);

CREATE TABLE IF NOT EXISTS championships (
    id          TEXT NOT NULL,
    owner_id    TEXT NOT NULL,
    data        TEXT NOT NULL,   -- JSON-encoded Championship, history inline
    created_at  TEXT NOT NULL,
    updated_at  TEXT NOT NULL,
    PRIMARY KEY (owner_id, id)
);

-- Templates and materialised instances share this table.
CREATE TABLE IF NOT EXISTS shows (
    id          TEXT NOT NULL,
    owner_id    TEXT NOT NULL,
    data        TEXT NOT NULL,   -- JSON-encoded Show, matches inline
    created_at  TEXT NOT NULL,
    updated_at  TEXT NOT NULL,
    PRIMARY KEY (owner_id, id)
);

CREATE TABLE IF NOT EXISTS rivalries (
    id          TEXT NOT NULL,
    owner_id    TEXT NOT NULL,
    data        TEXT NOT NULL,
    created_at  TEXT NOT NULL,
    updated_at  TEXT NOT NULL,
    PRIMARY KEY (owner_id, id)
);

CREATE TABLE IF NOT EXISTS storylines (
    id          TEXT NOT NULL,
    owner_id    TEXT NOT NULL,
    data        TEXT NOT NULL,
    created_at  TEXT NOT NULL,
    updated_at  TEXT NOT NULL,
    PRIMARY KEY (owner_id, id)
);

PRAGMA user_version = 1;
";
