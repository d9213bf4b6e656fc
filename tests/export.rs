use rostergen::config::AppConfig;
use rostergen::config::EvolutionConfig;
use rostergen::data::{JsonConnector, ScheduleRequest};
use rostergen::engines::generation::genome::encode;
use rostergen::engines::generation::{GeneticSearch, NoopProgress};
use rostergen::export::SolutionExporter;
use std::sync::Arc;

fn february_request() -> ScheduleRequest {
    let totals: Vec<String> = (0..29).map(|day| if day % 7 == 0 { "6" } else { "2" }.to_string()).collect();
    let row = vec!["1"; 29].join(",");
    let json = format!(
        r#"{{
            "month": "February",
            "year": 2024,
            "doctorNames": ["Ana", "Ben", "NA"],
            "doctorPreference": [[{row}], [{row}], [{na}]],
            "totalShifts": [{totals}]
        }}"#,
        row = row,
        na = vec!["\"NA\""; 29].join(","),
        totals = totals.join(","),
    );
    ScheduleRequest::try_from(JsonConnector::parse(&json).unwrap()).unwrap()
}

#[test]
fn test_export_matches_the_encoded_matrix() {
    let request = february_request();
    let mut matrix = vec![vec![0u8; 3]; 29];
    matrix[0][0] = 1;
    matrix[0][1] = 1;
    matrix[10][2] = 1;
    matrix[28][1] = 1;

    let genome = encode(&matrix, 3, 29).unwrap();
    let exported = SolutionExporter::export(&request, &genome).unwrap();

    assert_eq!(exported.month, "February");
    assert_eq!(exported.matrix, matrix);
    assert_eq!(exported.pairs(), vec![(0, 0), (1, 0), (2, 10), (1, 28)]);
    assert_eq!(exported.staffed_slots().count(), 3);

    let last = exported.slots.last().unwrap();
    assert_eq!(last.doctor_name, "Ben");
    assert_eq!(last.date.unwrap().to_string(), "2024-02-29");
}

#[test]
fn test_exported_json_shape() {
    let request = february_request();
    let mut genome = vec![0u8; request.genome_length()];
    genome[29 + 4] = 1;

    let exported = SolutionExporter::export(&request, &genome).unwrap();
    let json = serde_json::to_value(&exported).unwrap();

    assert_eq!(json["matrix"].as_array().unwrap().len(), 29);
    assert_eq!(json["slots"][0]["doctor_index"], 1);
    assert_eq!(json["slots"][0]["day"], 4);
    assert_eq!(json["slots"][0]["date"], "2024-02-05");
    assert_eq!(json["slots"][0]["placeholder"], false);
}

#[test]
fn test_search_result_exports_cleanly() {
    let request = Arc::new(february_request());
    let config = AppConfig {
        evolution: EvolutionConfig {
            population_size: 20,
            generations: 5,
            hall_of_fame_size: 4,
            ..Default::default()
        },
        ..Default::default()
    };

    let mut search = GeneticSearch::from_app_config(request.clone(), &config).unwrap();
    let outcome = search.run(NoopProgress).unwrap();
    let exported = SolutionExporter::export(&request, &outcome.best_genome).unwrap();

    let assigned: usize = exported.matrix.iter().flatten().map(|&b| b as usize).sum();
    assert_eq!(assigned, exported.slots.len());
    assert!(exported.slots.iter().all(|s| s.date.is_some()));
}
