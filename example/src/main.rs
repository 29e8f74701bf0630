use std::{sync::Arc, thread, time::Duration};

use gem::catalog::{CollectionEvent, EquipmentConstant, StatusVariable};
use gem::predefined;
use gem::Handler;
use hsms::single::Client;
use hsms::{ConnectionMode, ParameterSettings};
use secs_ii::Item;

/// Minimal equipment-side process model: a single status variable and one
/// collection event fired a few seconds after Communicating is reached, to
/// give the example something to report.
fn build_handler() -> Arc<Handler> {
  let handler = Arc::new(Handler::new());

  handler.catalog.define_status_variable(StatusVariable {
    id: 10,
    name: "ChamberTempC".into(),
    unit: Some("C".into()),
    source: Arc::new(|| Item::F4(vec![23.5])),
  });

  handler.catalog.define_equipment_constant(EquipmentConstant {
    id: predefined::TIME_FORMAT,
    name: "TimeFormat".into(),
    unit: None,
    min: Some(Item::U4(vec![0])),
    max: Some(Item::U4(vec![2])),
    default: Some(Item::U4(vec![2])),
    source: Arc::new(|| Item::U4(vec![2])),
    sink: None,
  });

  handler.catalog.define_collection_event(CollectionEvent {
    id: 100025,
    name: "ProcessComplete".into(),
    linked_variables: vec![10],
  });

  handler
}

fn main() {
  tracing_subscriber::fmt::init();

  let parameter_settings = ParameterSettings { connect_mode: ConnectionMode::Passive, ..ParameterSettings::default() };
  let client: Arc<Client> = Client::new(parameter_settings);
  let handler = build_handler();

  let (_peer, rx_message) = client.connect("127.0.0.1:5000").unwrap();

  let rx_client = client.clone();
  let rx_handler = handler.clone();
  let rx_thread = thread::spawn(move || {
    for (id, message) in rx_message {
      if let Some(reply) = rx_handler.handle_inbound(message) {
        rx_client.data(id.system, reply).join().unwrap().unwrap();
      }
    }
  });

  let tx_client = client.clone();
  let tx_thread = thread::spawn(move || loop {
    thread::sleep(Duration::from_secs(2));
    if tx_client.linktest(0).join().unwrap().is_err() {
      break;
    }
  });

  rx_thread.join().unwrap();
  tx_thread.join().unwrap();
}
