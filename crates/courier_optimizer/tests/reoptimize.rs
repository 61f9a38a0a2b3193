use courier_matrix_providers::{
    travel_matrix_client::TravelMatrixClient, travel_matrix_provider::TravelMatrixProvider,
};
use courier_optimizer::{
    json::types::{JsonReoptimizationRequest, JsonRoutingRequest},
    plan::Plan,
    reoptimize::reoptimize,
    solver::{
        solver::Solver,
        solver_params::{SolverParams, Termination},
    },
};
use jiff::SignedDuration;

fn params() -> SolverParams {
    SolverParams {
        terminations: vec![
            Termination::Iterations(20),
            Termination::Duration(SignedDuration::from_secs(3)),
        ],
        ..SolverParams::default()
    }
}

const FIRST_RUN: &str = r#"{
    "depot": "Depot",
    "vehicles": 1,
    "stops": [
        { "address": "A", "time_slot": "morning", "service_minutes": 10 },
        { "address": "B", "time_slot": "afternoon" },
        { "address": "C", "time_slot": "morning", "service_minutes": 1100 }
    ],
    "matrix_provider": { "Synthetic": { "min_secs": 600, "max_secs": 900, "seed": 1 } }
}"#;

#[tokio::test]
async fn test_dropped_stops_planned_again() {
    let client = TravelMatrixClient::default().without_google_client();

    // Serving C alone takes longer than a working day.
    let request: JsonRoutingRequest = serde_json::from_str(FIRST_RUN).unwrap();
    let problem = request.fetch_problem(&client).await.unwrap();
    let first = Solver::new(problem, params()).solve().unwrap();
    let plan = Plan::new(&first, &request.stop_infos());

    assert_eq!(plan.unserved.len(), 1);
    assert_eq!(plan.unserved[0].address, "C");

    let served = request
        .stops
        .iter()
        .filter(|stop| plan.unserved.iter().all(|unserved| unserved.address != stop.address))
        .cloned()
        .collect();
    let second_request = JsonReoptimizationRequest {
        depot: request.depot.clone(),
        vehicles: 1,
        served,
        dropped: plan
            .unserved
            .iter()
            .map(|stop| stop.address.clone())
            .collect(),
        matrix_provider: TravelMatrixProvider::Synthetic {
            min_secs: 600,
            max_secs: 900,
            seed: 1,
        },
        time_dimension: None,
    };

    let second = reoptimize(
        &second_request.to_request(),
        &client,
        &second_request.matrix_provider,
        params(),
    )
    .await
    .unwrap();

    assert!(second.unserved.is_empty());
    let second_plan = Plan::new(&second, &second_request.stop_infos());
    assert_eq!(second_plan.num_planned_stops(), 3);
    assert!(
        second_plan.routes[0]
            .stops
            .iter()
            .any(|stop| stop.address == "C" && stop.service_minutes == 5)
    );
}
