use hello_fortune::core::FortuneSource;
use hello_fortune::domain::model::BUILTIN_FORTUNES;
use hello_fortune::{FortuneList, FortuneProvider, HelloError};
use std::collections::HashSet;

/// 每次呼叫的結果都必須在清單之中
#[test]
fn test_get_returns_one_of_the_builtin_fortunes() {
    let provider = FortuneProvider::builtin();
    for _ in 0..200 {
        let msg = provider.get();
        assert!(
            BUILTIN_FORTUNES.contains(&msg),
            "get returned {:?}, not one of the expected messages",
            msg
        );
    }
}

#[test]
fn test_three_entry_list_membership() -> anyhow::Result<()> {
    let provider = FortuneProvider::new(FortuneList::new(["a", "b", "c"])?);
    let expected: HashSet<&str> = ["a", "b", "c"].into_iter().collect();

    for _ in 0..100 {
        assert!(expected.contains(provider.get()));
    }
    Ok(())
}

#[test]
fn test_single_entry_list() -> anyhow::Result<()> {
    let provider = FortuneProvider::new(FortuneList::new(["only"])?);
    for _ in 0..100 {
        assert_eq!(provider.get(), "only");
    }
    Ok(())
}

#[test]
fn test_not_a_constant_stub() {
    let provider = FortuneProvider::builtin();
    let seen: HashSet<&str> = (0..1000).map(|_| provider.get()).collect();
    assert!(seen.len() > 1, "only saw {:?}", seen);
}

#[test]
fn test_usable_through_trait_object() {
    let source: Box<dyn FortuneSource> = Box::new(FortuneProvider::builtin());
    assert!(BUILTIN_FORTUNES.contains(&source.get()));
}

#[test]
fn test_empty_list_rejected_at_construction() {
    let err = FortuneList::new(Vec::<&str>::new()).unwrap_err();
    assert!(matches!(err, HelloError::EmptyFortuneList));
}
