//! Bulk insert of an [`OntologyBuild`] in a single transaction.

use chrono::Utc;
use godb_config::SourceConfig;
use godb_graph::OntologyBuild;
use godb_parser::OboHeader;
use tracing::{debug, info};

use crate::GoDb;
use crate::error::DatabaseError;
use crate::rows::{
    MapMetadataRow, OBSOLETE_TABLE, OffspringRow, ParentRow, SYNONYM_TABLE, SynonymRow,
    TERM_TABLE, TermRow, count_rows, metadata_rows, offspring_table, ontology_rows, parents_table,
};

/// Row counts after a successful write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteSummary {
    /// Rows in `go_term` after duplicate ids were ignored.
    pub terms: u64,
    /// Rows in `go_obsolete` after duplicate ids were ignored.
    pub obsolete: u64,
    /// Counts written to `map_counts`, as built.
    pub tables: Vec<(&'static str, usize)>,
}

impl WriteSummary {
    /// Built count recorded for `table`.
    #[must_use]
    pub fn count(&self, table: &str) -> Option<usize> {
        self.tables
            .iter()
            .find(|(name, _)| *name == table)
            .map(|(_, count)| *count)
    }
}

fn to_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

impl GoDb {
    /// Insert every collection of `build`, plus provenance and counts.
    ///
    /// Terms and obsolete terms are inserted with `INSERT OR IGNORE`, so the
    /// first stanza for a duplicated id wins. Everything else is appended.
    /// Nothing is visible until the transaction commits.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if any statement or the commit fails; the
    /// transaction is rolled back.
    pub async fn write_build(
        &self,
        build: &OntologyBuild,
        header: &OboHeader,
        source: &SourceConfig,
    ) -> Result<WriteSummary, DatabaseError> {
        let built_at = Utc::now().to_rfc3339();
        let tx = self.conn.transaction().await?;

        for (name, value) in metadata_rows(header, &built_at) {
            tx.execute(
                "INSERT OR REPLACE INTO metadata (name, value) VALUES (?1, ?2)",
                libsql::params![name, value],
            )
            .await?;
        }

        for (short, long) in ontology_rows() {
            tx.execute(
                "INSERT OR IGNORE INTO go_ontology (ontology, term_type) VALUES (?1, ?2)",
                libsql::params![short, long],
            )
            .await?;
        }

        for (table, terms) in [(TERM_TABLE, &build.active), (OBSOLETE_TABLE, &build.obsolete)] {
            let mut stmt = tx
                .prepare(&format!(
                    "INSERT OR IGNORE INTO {table} (go_id, term, ontology, definition)
                     VALUES (?1, ?2, ?3, ?4)"
                ))
                .await?;
            for term in terms {
                let row = TermRow::from(term);
                stmt.execute(libsql::params![
                    row.go_id,
                    row.term,
                    row.ontology,
                    row.definition
                ])
                .await?;
                stmt.reset();
            }
            debug!(table, rows = terms.len(), "inserted terms");
        }

        let mut stmt = tx
            .prepare(
                "INSERT INTO go_synonym (go_id, synonym, secondary, scope, like_go_id)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )
            .await?;
        for synonym in &build.synonyms {
            let row = SynonymRow::from(synonym);
            stmt.execute(libsql::params![
                row.go_id,
                row.synonym,
                row.secondary,
                row.scope,
                row.like_go_id
            ])
            .await?;
            stmt.reset();
        }
        debug!(table = SYNONYM_TABLE, rows = build.synonyms.len(), "inserted synonyms");

        for partition in &build.partitions {
            let table = parents_table(partition.namespace);
            let mut stmt = tx
                .prepare(&format!(
                    "INSERT INTO {table} (go_id, parent_id, relationship_type) VALUES (?1, ?2, ?3)"
                ))
                .await?;
            for edge in &partition.edges {
                let row = ParentRow::from(edge);
                stmt.execute(libsql::params![
                    row.go_id,
                    row.parent_id,
                    row.relationship_type
                ])
                .await?;
                stmt.reset();
            }
            debug!(table, rows = partition.edges.len(), "inserted parents");

            let table = offspring_table(partition.namespace);
            let mut stmt = tx
                .prepare(&format!(
                    "INSERT INTO {table} (go_id, offspring_id) VALUES (?1, ?2)"
                ))
                .await?;
            for pair in &partition.closure {
                let row = OffspringRow::from(pair);
                stmt.execute(libsql::params![row.go_id, row.offspring_id])
                    .await?;
                stmt.reset();
            }
            debug!(table, rows = partition.closure.len(), "inserted offspring");
        }

        let map = MapMetadataRow::new(source, header);
        tx.execute(
            "INSERT INTO map_metadata (map_name, source_name, source_url, source_date)
             VALUES (?1, ?2, ?3, ?4)",
            libsql::params![map.map_name, map.source_name, map.source_url, map.source_date],
        )
        .await?;

        let tables = count_rows(build);
        for (name, count) in &tables {
            tx.execute(
                "INSERT OR REPLACE INTO map_counts (map_name, count) VALUES (?1, ?2)",
                libsql::params![*name, to_i64(*count)],
            )
            .await?;
        }

        tx.commit().await?;

        let summary = WriteSummary {
            terms: self.row_count(TERM_TABLE).await?,
            obsolete: self.row_count(OBSOLETE_TABLE).await?,
            tables,
        };
        info!(
            terms = summary.terms,
            obsolete = summary.obsolete,
            "store committed"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use godb_core::ids::IdPattern;
    use godb_graph::{NoopObserver, build_ontology};
    use godb_parser::parse_str;
    use pretty_assertions::assert_eq;

    const TEXT: &str = "\
format-version: 1.2
data-version: releases/2024-01-17

[Term]
id: GO:0000001
name: root
namespace: biological_process
def: \"The root.\" [GOC:x]

[Term]
id: GO:0000002
name: middle
namespace: biological_process
synonym: \"cell growth\" NARROW []
alt_id: GO:0019952
is_a: GO:0000001

[Term]
id: GO:0000003
name: leaf
namespace: biological_process
is_a: GO:0000002

[Term]
id: GO:0000001
name: duplicate root
namespace: biological_process

[Term]
id: GO:0000009
name: gone
namespace: molecular_function
is_obsolete: true
";

    async fn written() -> (GoDb, WriteSummary) {
        let mut stanzas = parse_str(TEXT);
        let records = stanzas.by_ref().collect::<Result<Vec<_>, _>>().unwrap();
        let header = stanzas.into_header();
        let build = build_ontology(records, &IdPattern::default(), &NoopObserver);

        let db = GoDb::open_local(":memory:").await.unwrap();
        let summary = db
            .write_build(&build, &header, &SourceConfig::default())
            .await
            .unwrap();
        (db, summary)
    }

    async fn strings(db: &GoDb, sql: &str) -> Vec<String> {
        let mut rows = db.conn().query(sql, ()).await.unwrap();
        let mut out = Vec::new();
        while let Some(row) = rows.next().await.unwrap() {
            out.push(row.get::<String>(0).unwrap());
        }
        out
    }

    #[tokio::test]
    async fn duplicate_ids_keep_first_stanza() {
        let (db, summary) = written().await;
        assert_eq!(summary.terms, 3);
        assert_eq!(summary.count("go_term"), Some(4));
        assert_eq!(
            strings(&db, "SELECT term FROM go_term WHERE go_id = 'GO:0000001'").await,
            vec!["root"]
        );
        assert_eq!(
            strings(&db, "SELECT definition FROM go_term WHERE go_id = 'GO:0000001'").await,
            vec!["The root."]
        );
    }

    #[tokio::test]
    async fn parents_and_offspring_rows() {
        let (db, _) = written().await;
        assert_eq!(
            strings(
                &db,
                "SELECT go_id || '>' || parent_id || ':' || relationship_type \
                 FROM go_bp_parents ORDER BY go_id"
            )
            .await,
            vec!["GO:0000002>GO:0000001:is_a", "GO:0000003>GO:0000002:is_a"]
        );
        assert_eq!(
            strings(
                &db,
                "SELECT go_id || '>' || offspring_id FROM go_bp_offspring \
                 ORDER BY go_id, offspring_id"
            )
            .await,
            vec![
                "GO:0000001>GO:0000002",
                "GO:0000001>GO:0000003",
                "GO:0000002>GO:0000003",
            ]
        );
        assert_eq!(db.row_count("go_mf_parents").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn synonyms_and_alt_ids() {
        let (db, _) = written().await;
        assert_eq!(
            strings(
                &db,
                "SELECT synonym || '|' || COALESCE(secondary, '-') || '|' || scope || '|' || like_go_id \
                 FROM go_synonym ORDER BY like_go_id"
            )
            .await,
            vec!["cell growth|-|NARROW|0", "GO:0019952|GO:0019952|EXACT|1"]
        );
    }

    #[tokio::test]
    async fn obsolete_terms_stored_separately() {
        let (db, summary) = written().await;
        assert_eq!(summary.obsolete, 1);
        assert_eq!(
            strings(&db, "SELECT ontology FROM go_obsolete").await,
            vec!["MF"]
        );
    }

    #[tokio::test]
    async fn provenance_and_counts() {
        let (db, _) = written().await;
        assert_eq!(
            strings(&db, "SELECT value FROM metadata WHERE name = 'data-version'").await,
            vec!["releases/2024-01-17"]
        );
        assert_eq!(
            strings(&db, "SELECT source_date FROM map_metadata WHERE map_name = 'GO'").await,
            vec!["releases/2024-01-17"]
        );
        assert_eq!(
            strings(&db, "SELECT CAST(count AS TEXT) FROM map_counts WHERE map_name = 'go_bp_offspring'")
                .await,
            vec!["3"]
        );
        assert_eq!(db.row_count("map_counts").await.unwrap(), 9);
        assert_eq!(db.row_count("go_ontology").await.unwrap(), 3);
        assert_eq!(
            strings(&db, "SELECT COUNT(*) || '' FROM metadata WHERE name IN ('godb_version', 'built_at')")
                .await,
            vec!["2"]
        );
    }
}
