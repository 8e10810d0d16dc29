//! Routing of stored progress through the flow state machine.

use async_trait::async_trait;
use mockall::mock;
use sf_core::ports::ProgressStorePort;
use sf_core::{ErrorSignal, FlowInput, FlowState, FlowStateMachine, Progress, ProgressToken};

mock! {
    pub Store {}

    #[async_trait]
    impl ProgressStorePort for Store {
        async fn load(&self) -> ProgressToken;
        async fn save(&self, progress: &Progress) -> Result<(), ErrorSignal>;
        async fn delete(&self) -> Result<(), ErrorSignal>;
    }
}

async fn route(store: &dyn ProgressStorePort) -> FlowState {
    let token = store.load().await;
    FlowStateMachine::transition(FlowState::Entry, FlowInput::ProgressLoaded(token))
        .expect("entry accepts a loaded token")
}

#[tokio::test]
async fn entry_routes_each_load_outcome_exactly_once() {
    let cases = [
        (ProgressToken::Absent, FlowState::Onboarding),
        (ProgressToken::Present(Progress::initial()), FlowState::Resume),
        (
            ProgressToken::Unreadable,
            FlowState::Abort {
                reason: ErrorSignal::StorageUnreadable,
            },
        ),
    ];

    for (token, expected) in cases {
        let mut store = MockStore::new();
        store
            .expect_load()
            .times(1)
            .returning(move || token.clone());
        store.expect_save().never();
        store.expect_delete().never();

        assert_eq!(route(&store).await, expected);
    }
}
