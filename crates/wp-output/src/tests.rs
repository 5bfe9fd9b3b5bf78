//! Integration tests for wp-output.

#[cfg(test)]
mod support {
    use wp_core::{NodeId, SimConfig};
    use wp_sim::{Sim, SimBuilder};
    use wp_spatial::Topology;

    /// The two-robot layout: `robotA` crosses the top row, `robotB` stops
    /// before node 3.
    pub fn reference_sim() -> Sim {
        let mut nodes = Vec::new();
        for i in 0..5u32 {
            let x = 50.0 + 100.0 * i as f32;
            nodes.push((NodeId(i + 1), x, 50.0));
            nodes.push((NodeId(i + 6), x, 150.0));
        }
        let topology = Topology::from_nodes(nodes).unwrap();
        SimBuilder::new(SimConfig::headless(), topology)
            .agent("robotA", [1, 2, 3, 4, 5].map(NodeId))
            .agent("robotB", [6, 7, 3, 8, 9].map(NodeId))
            .halt_instruction("robotB", "Stop before reaching node 3")
            .build()
            .unwrap()
    }
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::observer::SimOutputObserver;
    use crate::row::{EventKind, PositionRow, TickSummaryRow};
    use crate::writer::OutputWriter;

    use super::support::reference_sim;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn row(tick: u64, agent_id: u32, node_id: u32, event: EventKind) -> PositionRow {
        PositionRow {
            tick,
            agent_id,
            agent: format!("robot{agent_id}"),
            node_id,
            x: node_id as f32 * 100.0,
            y: 50.0,
            event,
        }
    }

    fn records(dir: &TempDir, file: &str) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("positions.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("positions.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["tick", "agent_id", "agent", "node_id", "x", "y", "event"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["tick", "moves"]);
    }

    #[test]
    fn csv_position_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_positions(&[row(0, 0, 1, EventKind::Place), row(1, 0, 2, EventKind::Move)])
            .unwrap();
        w.finish().unwrap();

        let rows = records(&dir, "positions.csv");
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[1][0], "1");      // tick
        assert_eq!(&rows[1][2], "robot0"); // agent
        assert_eq!(&rows[1][3], "2");      // node_id
        assert_eq!(&rows[1][4], "200");    // x
        assert_eq!(&rows[1][6], "move");   // event
    }

    #[test]
    fn csv_tick_summary() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&TickSummaryRow { tick: 3, moves: 2 }).unwrap();
        w.finish().unwrap();

        let rows = records(&dir, "tick_summaries.csv");
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "3");
        assert_eq!(&rows[0][1], "2");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_missing_dir_is_an_error() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("nope")).is_err());
    }

    #[test]
    fn integration_csv() {
        let mut sim = reference_sim();
        let dir = tmp();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        let summary = sim.run(&mut obs);
        assert!(obs.take_error().is_none(), "no write errors expected");
        assert_eq!(summary.ticks, 4);

        // 2 placements + 5 moves + 2 terminal rows.
        let rows = records(&dir, "positions.csv");
        let events: Vec<(&str, &str, &str)> =
            rows.iter().map(|r| (&r[0], &r[2], &r[6])).collect();
        assert_eq!(
            events,
            [
                ("0", "robotA", "place"),
                ("0", "robotB", "place"),
                ("1", "robotA", "move"),
                ("1", "robotB", "move"),
                ("1", "robotB", "halted"),
                ("2", "robotA", "move"),
                ("3", "robotA", "move"),
                ("4", "robotA", "move"),
                ("4", "robotA", "finished"),
            ]
        );
        // Halted row repeats the last coordinate.
        assert_eq!((&rows[4][3], &rows[4][4], &rows[4][5]), ("7", "150", "150"));

        let summaries: Vec<(String, String)> = records(&dir, "tick_summaries.csv")
            .iter()
            .map(|r| (r[0].to_owned(), r[1].to_owned()))
            .collect();
        let expected: Vec<(String, String)> = [("1", "2"), ("2", "1"), ("3", "1"), ("4", "1")]
            .iter()
            .map(|&(t, m)| (t.to_owned(), m.to_owned()))
            .collect();
        assert_eq!(summaries, expected);
    }
}

#[cfg(test)]
mod observer_tests {
    use wp_core::{AgentId, NodeId, SimConfig};
    use wp_sim::SimBuilder;
    use wp_spatial::Topology;

    use crate::observer::SimOutputObserver;
    use crate::row::{EventKind, PositionRow, TickSummaryRow};
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult};

    use super::support::reference_sim;

    /// Keeps rows in memory; optionally fails every position write.
    #[derive(Default)]
    struct MemWriter {
        positions: Vec<PositionRow>,
        summaries: Vec<TickSummaryRow>,
        finishes:  usize,
        fail:      bool,
        attempts:  usize,
    }

    impl OutputWriter for MemWriter {
        fn write_positions(&mut self, rows: &[PositionRow]) -> OutputResult<()> {
            self.attempts += 1;
            if self.fail {
                return Err(OutputError::Io(std::io::Error::other(format!(
                    "write #{}",
                    self.attempts
                ))));
            }
            self.positions.extend_from_slice(rows);
            Ok(())
        }

        fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
            self.summaries.push(*row);
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finishes += 1;
            Ok(())
        }
    }

    #[test]
    fn rows_are_batched_per_tick() {
        let mut sim = reference_sim();
        let mut obs = SimOutputObserver::new(MemWriter::default());
        sim.run(&mut obs);
        let w = obs.into_writer();

        // Placements flushed once, then one batch per tick.
        assert_eq!(w.attempts, 1 + 4);
        assert_eq!(w.summaries.len(), 4);
        assert_eq!(w.finishes, 1);
        assert!(w.positions.iter().all(|r| r.tick <= 4));
    }

    #[test]
    fn first_error_is_kept() {
        let mut sim = reference_sim();
        let mut obs = SimOutputObserver::new(MemWriter { fail: true, ..MemWriter::default() });
        sim.run(&mut obs);

        let err = obs.take_error().expect("write failure should be stored");
        assert!(err.to_string().contains("write #1"), "{err}");
        assert!(obs.take_error().is_none(), "error is taken only once");
    }

    #[test]
    fn agent_terminal_at_placement_gets_a_row() {
        let topology = Topology::from_nodes([(NodeId(1), 0.0, 0.0), (NodeId(2), 10.0, 0.0)]).unwrap();
        let mut sim = SimBuilder::new(SimConfig::headless(), topology)
            .agent("parked", [NodeId(1)])
            .agent("blocked", [NodeId(1), NodeId(2)])
            .halt_instruction("blocked", "Stop before reaching node 2")
            .build()
            .unwrap();
        let mut obs = SimOutputObserver::new(MemWriter::default());
        let summary = sim.run(&mut obs);
        assert_eq!(summary.ticks, 0);

        let w = obs.into_writer();
        let events: Vec<(AgentId, EventKind)> = w
            .positions
            .iter()
            .map(|r| (AgentId(r.agent_id), r.event))
            .collect();
        assert_eq!(
            events,
            [
                (AgentId(0), EventKind::Place),
                (AgentId(0), EventKind::Finished),
                (AgentId(1), EventKind::Place),
                (AgentId(1), EventKind::Halted),
            ]
        );
        assert!(w.summaries.is_empty());
        assert_eq!(w.finishes, 1);
    }
}

// ── SQLite tests ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use tempfile::TempDir;

    use crate::observer::SimOutputObserver;
    use crate::row::{EventKind, PositionRow, TickSummaryRow};
    use crate::sqlite::SqliteWriter;
    use crate::writer::OutputWriter;

    use super::support::reference_sim;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn open(dir: &TempDir) -> rusqlite::Connection {
        rusqlite::Connection::open(dir.path().join("output.db")).unwrap()
    }

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("output.db").exists());
    }

    #[test]
    fn sqlite_position_columns() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_positions(&[PositionRow {
            tick:     2,
            agent_id: 1,
            agent:    "robotB".into(),
            node_id:  7,
            x:        150.0,
            y:        150.0,
            event:    EventKind::Halted,
        }])
        .unwrap();
        w.finish().unwrap();

        let (agent, node, x, event): (String, i64, f64, String) = open(&dir)
            .query_row(
                "SELECT agent, node_id, x, event FROM positions WHERE tick = 2",
                [],
                |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?, r.get(3)?)),
            )
            .unwrap();
        assert_eq!(agent, "robotB");
        assert_eq!(node, 7);
        assert_eq!(x, 150.0);
        assert_eq!(event, "halted");
    }

    #[test]
    fn sqlite_tick_summary() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&TickSummaryRow { tick: 7, moves: 3 }).unwrap();
        w.finish().unwrap();

        let moves: i64 = open(&dir)
            .query_row("SELECT moves FROM tick_summaries WHERE tick = 7", [], |r| r.get(0))
            .unwrap();
        assert_eq!(moves, 3);
    }

    #[test]
    fn integration_sqlite() {
        let mut sim = reference_sim();
        let dir = tmp();
        let mut obs = SimOutputObserver::new(SqliteWriter::new(dir.path()).unwrap());
        sim.run(&mut obs);
        assert!(obs.take_error().is_none());

        let conn = open(&dir);
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM positions", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 9);
        let ticks: i64 = conn
            .query_row("SELECT COUNT(*) FROM tick_summaries", [], |r| r.get(0))
            .unwrap();
        assert_eq!(ticks, 4);
    }
}
