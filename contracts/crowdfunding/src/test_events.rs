extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    vec, Address, Env, IntoVal, TryIntoVal,
};

use crate::events::{GoalReached, PledgeReceived, ProjectCreated};
use crate::{Crowdfunding, CrowdfundingClient};

fn setup() -> (Env, CrowdfundingClient<'static>) {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(Crowdfunding, ());
    let client = CrowdfundingClient::new(&env, &contract_id);
    (env, client)
}

#[test]
fn test_project_created_event() {
    let (env, client) = setup();
    let creator = Address::generate(&env);
    let goal = 5000i128;
    let deadline = 200u32;

    let milestones = vec![&env, 1000i128, 2500];
    let id = client.create_project(&creator, &9, &goal, &deadline, &milestones);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("created"), project_id)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("created").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    // Data: ProjectCreated struct
    let event_data: ProjectCreated = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        ProjectCreated {
            project_id: id,
            creator: creator.clone(),
            goal,
            deadline,
        }
    );
}

#[test]
fn test_pledge_received_event() {
    let (env, client) = setup();
    let creator = Address::generate(&env);
    let backer = Address::generate(&env);

    let milestones = vec![&env, 500i128];
    client.create_project(&creator, &1, &10_000, &100, &milestones);
    client.pledge(&backer, &1, &1_500);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("pledged"), project_id)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("pledged").into_val(&env),
        1u64.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    // Data: PledgeReceived struct, carrying the post-pledge total.
    let event_data: PledgeReceived = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        PledgeReceived {
            project_id: 1,
            backer: backer.clone(),
            amount: 1_500,
            total_pledged: 1_500,
        }
    );
}

#[test]
fn test_goal_reached_event_on_exact_fill() {
    let (env, client) = setup();
    let creator = Address::generate(&env);
    let backer = Address::generate(&env);

    let milestones = vec![&env, 500i128];
    client.create_project(&creator, &1, &1_000, &100, &milestones);
    client.pledge(&backer, &1, &400);
    client.pledge(&backer, &1, &600);

    let all_events = env.events().all();

    // The filling pledge publishes `pledged` then `goal_met`.
    let last_event = all_events.last().expect("No events found");
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("goal_met").into_val(&env),
        1u64.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: GoalReached = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        GoalReached {
            project_id: 1,
            total_pledged: 1_000,
        }
    );

    let pledged_event = all_events
        .get(all_events.len() - 2)
        .expect("No pledged event found");
    let pledged_data: PledgeReceived = pledged_event.2.try_into_val(&env).unwrap();
    assert_eq!(pledged_data.amount, 600);
    assert_eq!(pledged_data.total_pledged, 1_000);
}

#[test]
fn test_no_events_on_rejected_operations() {
    let (env, client) = setup();
    let creator = Address::generate(&env);
    let backer = Address::generate(&env);

    let milestones = vec![&env, 500i128];
    client.create_project(&creator, &1, &1_000, &100, &milestones);

    // A rejected pledge publishes nothing.
    let events_before = env.events().all().len();
    let _ = client.try_pledge(&backer, &1, &2_000);
    assert_eq!(env.events().all().len(), events_before);
}
