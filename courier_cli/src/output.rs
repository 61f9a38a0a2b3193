use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};
use courier_optimizer::{diagnostics::explain_unserved, plan::Plan};

pub fn print_plan(plan: &Plan) {
    for route in &plan.routes {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["#", "Address", "Arrival", "Service (min)", "Departure"]);

        for (order, stop) in route.stops.iter().enumerate() {
            table.add_row(vec![
                order.to_string(),
                stop.address.clone(),
                stop.arrival.clone(),
                stop.service_minutes.to_string(),
                stop.departure.clone(),
            ]);
        }

        println!("Vehicle {}", route.vehicle);
        println!("{table}");
    }

    if plan.unserved.is_empty() {
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Unserved", "Slot", "Likely causes", "Suggestions"]);

    for stop in &plan.unserved {
        let diagnosis = explain_unserved(&stop.address, stop.time_slot, stop.service_minutes);

        table.add_row(vec![
            stop.address.clone(),
            stop.time_slot.to_string(),
            diagnosis
                .causes
                .iter()
                .map(|cause| cause.description())
                .collect::<Vec<_>>()
                .join("\n"),
            diagnosis.suggestions.join("\n"),
        ]);
    }

    println!("{table}");
}
