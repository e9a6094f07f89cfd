mod common;

use beanstalk_di::{BeanContainer, BeanContainerBuilder, BeanDescriptor};
use common::{registry, People};
use proptest::prelude::*;

/// Field values of every bean, with references replaced by the referenced id
fn snapshot(container: &BeanContainer) -> Vec<(String, String, i32, Option<String>)> {
    container
        .bean_ids()
        .into_iter()
        .map(|id| {
            container
                .get_bean(id)
                .and_then(|bean| {
                    bean.read::<People, _>(|p| {
                        (
                            id.to_string(),
                            p.user_name.clone(),
                            p.age,
                            p.partner.as_ref().map(|partner| partner.id().to_string()),
                        )
                    })
                })
                .unwrap()
        })
        .collect()
}

/// `count` people, each with a partner picked from `partners` (which may point out of range)
fn people(count: usize, partners: &[usize]) -> Vec<BeanDescriptor> {
    (0..count)
        .map(|i| {
            BeanDescriptor::new(format!("p{i}"), "demo.People")
                .with_literal("user_name", format!("person {i}"))
                .with_literal("age", (20 + i).to_string())
                .with_reference("partner", format!("p{}", partners[i]))
        })
        .collect()
}

proptest! {
    #[test]
    fn declaration_order_does_not_change_the_graph(
        (descriptors, shuffled) in (1usize..8)
            .prop_flat_map(|count| proptest::collection::vec(0..count + 2, count))
            .prop_map(|partners| people(partners.len(), &partners))
            .prop_flat_map(|descriptors| {
                let shuffled = Just(descriptors.clone()).prop_shuffle();
                (Just(descriptors), shuffled)
            })
    ) {
        let original = BeanContainerBuilder::new(registry()).build(descriptors);
        let permuted = BeanContainerBuilder::new(registry()).build(shuffled);

        prop_assert_eq!(snapshot(&original), snapshot(&permuted));
        prop_assert_eq!(
            original.diagnostics().diagnostics.len(),
            permuted.diagnostics().diagnostics.len()
        );
    }

    #[test]
    fn every_resolved_partner_is_the_live_singleton(
        partners in (1usize..8).prop_flat_map(|count| proptest::collection::vec(0..count, count))
    ) {
        let container = BeanContainerBuilder::new(registry()).build(people(partners.len(), &partners));

        for (i, partner) in partners.iter().enumerate() {
            let bean = container.get_bean(&format!("p{i}")).unwrap();
            let expected = container.get_bean(&format!("p{partner}")).unwrap();
            let actual = bean.read::<People, _>(|p| p.partner.clone()).flatten().unwrap();
            prop_assert!(actual.ptr_eq(&expected));
        }
    }
}
