//! End-to-end flows over the in-memory store with the real services wired
//! together the way an application would wire them.

use std::sync::Arc;

use devflow::domain::ports::{
    AnswerCommand, CollectionCommand, CreateAnswerRequest, CreateQuestionRequest,
    CreateQuestionResponse, GlobalSearchRequest, QuestionCommand, QuestionRepository,
    RegisterUserRequest, SearchKind, SearchQuery, TagRepository, ToggleSaveRequest, UserCommand,
    UserRepository, VoteCommand, VoteRequest, VoteTarget,
};
use devflow::domain::{
    AnswerService, CollectionService, QuestionService, SearchService, UserId, UserService,
    VoteService,
};
use devflow::outbound::memory::MemoryStore;

type QuestionSvc =
    QuestionService<MemoryStore, MemoryStore, MemoryStore, MemoryStore, MemoryStore>;

struct Platform {
    store: Arc<MemoryStore>,
    questions: Arc<QuestionSvc>,
    answers: AnswerService<MemoryStore, MemoryStore, MemoryStore, MemoryStore>,
    votes: VoteService<MemoryStore, MemoryStore, MemoryStore>,
    collections: CollectionService<MemoryStore, MemoryStore>,
    users: UserService<QuestionSvc, MemoryStore, MemoryStore>,
    search: SearchService<MemoryStore, MemoryStore, MemoryStore, MemoryStore>,
}

fn platform() -> Platform {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let store = Arc::new(MemoryStore::new());
    let questions = Arc::new(QuestionService::new(
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
    ));
    Platform {
        store: store.clone(),
        questions: questions.clone(),
        answers: AnswerService::new(store.clone(), store.clone(), store.clone(), store.clone()),
        votes: VoteService::new(store.clone(), store.clone(), store.clone()),
        collections: CollectionService::new(store.clone(), store.clone()),
        users: UserService::new(questions, store.clone(), store.clone()),
        search: SearchService::new(store.clone(), store.clone(), store.clone(), store),
    }
}

async fn register(platform: &Platform, name: &str) -> UserId {
    platform
        .users
        .register(RegisterUserRequest {
            display_name: name.to_owned(),
        })
        .await
        .expect("registration succeeds")
        .user_id
}

async fn ask(platform: &Platform, author: UserId, title: &str) -> CreateQuestionResponse {
    platform
        .questions
        .create(CreateQuestionRequest {
            author_id: author,
            title: title.to_owned(),
            body: "A body that is definitely long enough for the rules.".to_owned(),
            tags: vec!["rust".to_owned()],
        })
        .await
        .expect("question created")
}

async fn reputation(platform: &Platform, user_id: UserId) -> i64 {
    UserRepository::find_by_id(&*platform.store, user_id)
        .await
        .expect("user lookup")
        .expect("user present")
        .reputation()
}

#[tokio::test]
async fn upvote_then_swing_settles_both_ledgers() {
    let platform = platform();
    let asker = register(&platform, "Asker").await;
    let voter = register(&platform, "Voter").await;
    let question = ask(&platform, asker, "How do I borrow twice?").await;
    assert_eq!(reputation(&platform, asker).await, 5);

    let request = VoteRequest {
        target: VoteTarget::Question(question.question_id),
        voter_id: voter,
    };

    let receipt = platform.votes.upvote(request).await.expect("upvote");
    assert_eq!(receipt.author_delta, 10);
    assert_eq!(reputation(&platform, asker).await, 15);
    assert_eq!(reputation(&platform, voter).await, 1);

    let receipt = platform.votes.downvote(request).await.expect("swing");
    assert_eq!(receipt.author_delta, -12);
    assert_eq!(reputation(&platform, asker).await, 3);
    assert_eq!(reputation(&platform, voter).await, -1);
}

#[tokio::test]
async fn self_votes_never_touch_reputation() {
    let platform = platform();
    let asker = register(&platform, "Asker").await;
    let question = ask(&platform, asker, "Voting on my own question").await;

    let receipt = platform
        .votes
        .upvote(VoteRequest {
            target: VoteTarget::Question(question.question_id),
            voter_id: asker,
        })
        .await
        .expect("upvote");

    assert!(receipt.self_vote);
    assert_eq!(reputation(&platform, asker).await, 5);
}

#[tokio::test]
async fn toggling_save_three_times_oscillates() {
    let platform = platform();
    let asker = register(&platform, "Asker").await;
    let saver = register(&platform, "Saver").await;
    let question = ask(&platform, asker, "A question worth saving").await;

    let request = ToggleSaveRequest {
        user_id: saver,
        question_id: question.question_id,
    };

    for expected in [true, false, true] {
        let response = platform
            .collections
            .toggle_save(request)
            .await
            .expect("toggle");
        assert_eq!(response.saved, expected);
    }

    let saved = UserRepository::find_by_id(&*platform.store, saver)
        .await
        .expect("user lookup")
        .expect("user present")
        .has_saved(question.question_id);
    assert!(saved);
}

#[tokio::test]
async fn question_deletion_cascades_over_answers_interactions_and_tags() {
    let platform = platform();
    let asker = register(&platform, "Asker").await;
    let helper = register(&platform, "Helper").await;
    let question = ask(&platform, asker, "A question soon deleted").await;

    let mut answer_ids = Vec::new();
    for _ in 0..2 {
        let response = platform
            .answers
            .create(CreateAnswerRequest {
                author_id: helper,
                question_id: question.question_id,
                body: "An answer body that is clearly long enough.".to_owned(),
            })
            .await
            .expect("answer created");
        answer_ids.push(response.answer_id);
    }
    assert_eq!(reputation(&platform, helper).await, 20);

    platform
        .questions
        .delete(question.question_id)
        .await
        .expect("cascade");

    assert!(
        QuestionRepository::find_by_id(&*platform.store, question.question_id)
            .await
            .expect("lookup")
            .is_none()
    );
    for answer_id in answer_ids {
        let gone = devflow::domain::ports::AnswerRepository::find_by_id(
            &*platform.store,
            answer_id,
        )
        .await
        .expect("lookup");
        assert!(gone.is_none());
    }
    let tag = TagRepository::find_by_id(&*platform.store, question.tag_ids[0])
        .await
        .expect("lookup")
        .expect("tag survives the cascade");
    assert_eq!(tag.question_count(), 0);
    // Authoring +5 then deletion -5 nets zero.
    assert_eq!(reputation(&platform, asker).await, 0);
}

#[tokio::test]
async fn deleting_a_user_removes_their_questions() {
    let platform = platform();
    let asker = register(&platform, "Asker").await;
    let first = ask(&platform, asker, "First question of a leaver").await;
    let second = ask(&platform, asker, "Second question of a leaver").await;

    platform.users.delete(asker).await.expect("user deleted");

    for question_id in [first.question_id, second.question_id] {
        assert!(
            QuestionRepository::find_by_id(&*platform.store, question_id)
                .await
                .expect("lookup")
                .is_none()
        );
    }
    assert!(
        UserRepository::find_by_id(&*platform.store, asker)
            .await
            .expect("lookup")
            .is_none()
    );
}

#[tokio::test]
async fn repeat_views_count_once_per_user_in_the_activity_log() {
    let platform = platform();
    let asker = register(&platform, "Asker").await;
    let reader = register(&platform, "Reader").await;
    let question = ask(&platform, asker, "A much viewed question").await;

    for _ in 0..3 {
        platform
            .questions
            .record_view(question.question_id, Some(reader))
            .await
            .expect("view recorded");
    }

    let stored = QuestionRepository::find_by_id(&*platform.store, question.question_id)
        .await
        .expect("lookup")
        .expect("question present");
    assert_eq!(stored.views(), 3);

    let viewed = devflow::domain::ports::InteractionRepository::has_viewed(
        &*platform.store,
        reader,
        question.question_id,
    )
    .await
    .expect("lookup");
    assert!(viewed);
    // Sweeping the question's records removes the ask plus exactly one view.
    let removed = devflow::domain::ports::InteractionRepository::delete_by_question(
        &*platform.store,
        question.question_id,
    )
    .await
    .expect("sweep");
    assert_eq!(removed, 2);
}

#[tokio::test]
async fn untyped_search_caps_each_kind_and_typed_search_digs_deeper() {
    let platform = platform();
    let asker = register(&platform, "Borrow Fan").await;
    for title in [
        "Borrowing in loops",
        "Borrowing across threads",
        "Borrowing twice politely",
    ] {
        ask(&platform, asker, title).await;
    }

    let untyped = platform
        .search
        .search(GlobalSearchRequest {
            query: "borrow".to_owned(),
            kind: None,
        })
        .await
        .expect("search");
    let question_hits = untyped
        .iter()
        .filter(|hit| hit.kind == SearchKind::Question)
        .count();
    assert_eq!(question_hits, 2);
    let user_hits = untyped
        .iter()
        .filter(|hit| hit.kind == SearchKind::User)
        .count();
    assert_eq!(user_hits, 1);

    let typed = platform
        .search
        .search(GlobalSearchRequest {
            query: "borrow".to_owned(),
            kind: Some(SearchKind::Question),
        })
        .await
        .expect("search");
    assert_eq!(typed.len(), 3);
    assert!(typed.iter().all(|hit| hit.kind == SearchKind::Question));
}
