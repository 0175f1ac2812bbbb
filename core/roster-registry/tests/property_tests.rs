use proptest::prelude::*;
use roster_registry::UserRegistry;
use roster_types::{NewUser, UserId};

fn block_on<F: std::future::Future>(fut: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
        .block_on(fut)
}

proptest! {
    #[test]
    fn create_ids_are_one_through_n(names in prop::collection::vec(".*", 0..32)) {
        let ids = block_on(async {
            let registry = UserRegistry::new();
            let mut ids = Vec::new();
            for name in &names {
                ids.push(registry.create(NewUser::new(name.as_str(), "")).await.id.get());
            }
            ids
        });
        let expected: Vec<i64> = (1..=names.len() as i64).collect();
        prop_assert_eq!(ids, expected);
    }

    #[test]
    fn filter_agrees_with_lowercase_contains(
        names in prop::collection::vec("[a-zA-Z]{0,8}", 0..16),
        needle in "[a-zA-Z]{0,3}",
    ) {
        let (all, found) = block_on(async {
            let registry = UserRegistry::new();
            for name in &names {
                registry.create(NewUser::new(name.as_str(), "")).await;
            }
            (registry.list_all().await, registry.filter_by_name(&needle).await)
        });
        let expected: Vec<_> = all
            .into_iter()
            .filter(|u| u.name.to_lowercase().contains(&needle.to_lowercase()))
            .collect();
        prop_assert_eq!(found, expected);
    }

    #[test]
    fn deletes_shrink_by_one_and_only_once(count in 1usize..20, target in 1i64..25) {
        let (first, second, remaining) = block_on(async {
            let registry = UserRegistry::new();
            for i in 0..count {
                registry.create(NewUser::new(format!("u{i}"), "")).await;
            }
            let first = registry.delete_by_id(UserId::new(target)).await.is_ok();
            let second = registry.delete_by_id(UserId::new(target)).await.is_ok();
            (first, second, registry.len().await)
        });
        let existed = target as usize <= count;
        prop_assert_eq!(first, existed);
        prop_assert!(!second);
        prop_assert_eq!(remaining, if existed { count - 1 } else { count });
    }
}
