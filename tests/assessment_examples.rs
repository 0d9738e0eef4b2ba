use propline::domain::StatLine;
use propline::{
    assess, AssessError, BetQuery, Dataset, DefenseImpact, LeagueAverages, LineAssessment,
    PlayerRecord, TeamRecord,
};
use std::path::Path;

fn team(abbrev: &str, drtg: f64, efg_allowed: f64) -> TeamRecord {
    TeamRecord {
        team: abbrev.to_string(),
        drtg,
        efg_allowed,
    }
}

fn sample_dataset() -> Dataset {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
    Dataset::load_dir(dir).expect("sample data should load")
}

#[test]
fn two_team_league_averages_and_impact() {
    let teams = vec![team("BOS", 100.0, 50.0), team("MIA", 110.0, 55.0)];
    let players = vec![PlayerRecord {
        player: "X".to_string(),
        team: "BOS".to_string(),
        stats: StatLine {
            points: 20.0,
            ..StatLine::default()
        },
    }];

    let league = LeagueAverages::from_teams(&teams).unwrap();
    assert_eq!(league.drtg, 105.0);
    assert_eq!(league.efg_allowed, 52.5);

    let strong = assess(
        &BetQuery::new("Boston Celtics", "X", "PTS", "25", "BOS"),
        &players,
        &teams,
    )
    .unwrap();
    assert_eq!(strong.impact, DefenseImpact::Strong);
    assert_eq!(strong.assessment, LineAssessment::TooHigh);

    let weak = assess(
        &BetQuery::new("Boston Celtics", "X", "PTS", "15", "MIA"),
        &players,
        &teams,
    )
    .unwrap();
    assert_eq!(weak.impact, DefenseImpact::Weak);
    assert_eq!(weak.assessment, LineAssessment::TooLow);

    let exact = assess(
        &BetQuery::new("Boston Celtics", "X", "PTS", "20", "MIA"),
        &players,
        &teams,
    )
    .unwrap();
    assert_eq!(exact.assessment, LineAssessment::Accurate);
}

#[test]
fn sample_data_covers_every_team() {
    let dataset = sample_dataset();
    assert_eq!(dataset.teams().len(), 30);
    for (abbrev, _) in propline::domain::teams::entries() {
        assert!(
            dataset.teams().iter().any(|t| t.team == *abbrev),
            "missing team record for {abbrev}"
        );
    }
}

#[test]
fn sample_data_assessments() {
    let dataset = sample_dataset();

    let q = BetQuery::new("Denver Nuggets", "Nikola Jokic", "TRB", "11.5", "WAS");
    let result = dataset.assess(&q).unwrap();
    assert_eq!(result.player_avg, 12.4);
    assert_eq!(result.assessment, LineAssessment::TooLow);
    assert_eq!(result.impact, DefenseImpact::Weak);

    let q = BetQuery::new(
        "Boston Celtics",
        "Jayson Tatum",
        "points",
        "26.9",
        "Minnesota Timberwolves",
    );
    let result = dataset.assess(&q).unwrap();
    assert_eq!(result.assessment, LineAssessment::Accurate);
    assert_eq!(result.impact, DefenseImpact::Strong);

    // Mixed signals: worse DRtg than average, better eFG% allowed.
    let q = BetQuery::new("Dallas Mavericks", "Luka Doncic", "AST", "10.5", "DAL");
    let result = dataset.assess(&q).unwrap();
    assert_eq!(result.impact, DefenseImpact::Average);
    assert_eq!(result.assessment, LineAssessment::TooHigh);
}

#[test]
fn sample_data_failures() {
    let dataset = sample_dataset();

    let q = BetQuery::new("Boston Celtics", "Nikola Jokic", "PTS", "20", "MIA");
    assert!(matches!(
        dataset.assess(&q),
        Err(AssessError::PlayerNotFound { .. })
    ));

    let q = BetQuery::new("Boston Celtics", "Jayson Tatum", "PTS", "20", "SEA");
    assert_eq!(
        dataset.assess(&q),
        Err(AssessError::OpponentNotFound {
            opponent: "SEA".to_string()
        })
    );

    let q = BetQuery::new("Boston Celtics", "Jayson Tatum", "PTS", "twenty", "MIA");
    assert_eq!(
        dataset.assess(&q),
        Err(AssessError::IncompleteQuery { field: "line" })
    );
}
