use anchor_lang::prelude::Pubkey;
use proptest::prelude::*;
use protocol_tx_builder::constants::{CLOCK_OBJECT_ID, MAX_COMMANDS, MAX_INPUTS};
use protocol_tx_builder::{
    Argument, BorrowFee, CallArg, IncentiveRewardFactor, InterestModel, MoveTarget,
    OBLIGATION_HOT_POTATO_INDEX, OBLIGATION_INDEX, OBLIGATION_KEY_INDEX, ObligationAccess,
    OutflowLimiterModel, ProgrammableTxBlock, ProtocolIds, ProtocolTxBuilder, PureValue,
    ResultHandle, RiskModel, TransactionBlock, TxArg, TypeTag,
};

const USDC: &str = "0xa1::usdc::USDC";

fn ids() -> ProtocolIds {
    ProtocolIds::parse("0x100", "0xad", "0x3a", "0x7e", "0x7c", "0x5e").expect("valid ids")
}

fn builder() -> ProtocolTxBuilder {
    ProtocolTxBuilder::new(ids())
}

fn object(id: Pubkey) -> Option<CallArg> {
    Some(CallArg::Object(id))
}

fn pure_u64(value: u64) -> Option<CallArg> {
    Some(CallArg::Pure(value.to_le_bytes().to_vec()))
}

/// Input-pool view of a command's arguments; handles resolve to `None`
fn resolved(block: &ProgrammableTxBlock, command: usize) -> Vec<Option<CallArg>> {
    block.commands()[command]
        .arguments
        .iter()
        .map(|argument| block.resolve(argument).cloned())
        .collect()
}

fn function(block: &ProgrammableTxBlock, command: usize) -> &str {
    &block.commands()[command].target.function
}

fn risk_model() -> RiskModel {
    RiskModel {
        collateral_factor: 80,
        liquidation_factor: 90,
        liquidation_penalty: 5,
        liquidation_discount: 4,
        scale: 100,
        max_collateral_amount: 1_000_000,
    }
}

fn interest_model() -> InterestModel {
    InterestModel {
        base_borrow_rate_per_sec: 1,
        interest_rate_scale: 2,
        borrow_rate_on_mid_kink: 3,
        mid_kink: 4,
        borrow_rate_on_high_kink: 5,
        high_kink: 6,
        max_borrow_rate: 7,
        revenue_factor: 8,
        borrow_weight: 9,
        scale: 10,
        min_borrow_amount: 11,
    }
}

#[test]
fn add_limiter_appends_single_call() {
    let ids = ids();
    let mut block = ProgrammableTxBlock::new();
    builder()
        .add_limiter(
            &mut block,
            &OutflowLimiterModel {
                outflow_limit: 100,
                outflow_cycle_duration: 60,
                outflow_segment_duration: 10,
            },
            USDC,
        )
        .unwrap();

    assert_eq!(block.len(), 1);
    let call = &block.commands()[0];
    assert_eq!(call.target.package, ids.package_id);
    assert_eq!(call.target.module, "app");
    assert_eq!(call.target.function, "add_limiter");
    assert_eq!(call.type_arguments, vec![TypeTag::from(USDC)]);
    assert_eq!(
        resolved(&block, 0),
        vec![
            object(ids.admin_cap_id),
            object(ids.market_id),
            pure_u64(100),
            pure_u64(60),
            pure_u64(10),
        ]
    );
}

#[test]
fn risk_model_change_feeds_apply_step() {
    let ids = ids();
    let model = risk_model();

    for update in [false, true] {
        let mut block = ProgrammableTxBlock::new();
        if update {
            builder().update_risk_model(&mut block, &model, USDC).unwrap();
        } else {
            builder().add_risk_model(&mut block, &model, USDC).unwrap();
        }

        assert_eq!(block.len(), 2);
        assert_eq!(function(&block, 0), "create_risk_model_change");
        assert_eq!(
            function(&block, 1),
            if update { "update_risk_model" } else { "add_risk_model" }
        );
        assert_eq!(
            resolved(&block, 0),
            vec![
                object(ids.admin_cap_id),
                pure_u64(80),
                pure_u64(90),
                pure_u64(5),
                pure_u64(4),
                pure_u64(100),
                pure_u64(1_000_000),
            ]
        );

        let apply = &block.commands()[1];
        assert_eq!(apply.arguments.len(), 3);
        assert_eq!(apply.arguments[2], Argument::Result(0));
        assert_eq!(resolved(&block, 1)[..2], [object(ids.market_id), object(ids.admin_cap_id)]);
        for call in block.commands() {
            assert_eq!(call.type_arguments, vec![TypeTag::from(USDC)]);
        }
    }
}

#[test]
fn interest_model_add_takes_clock_update_does_not() {
    let ids = ids();
    let model = interest_model();

    let mut added = ProgrammableTxBlock::new();
    builder().add_interest_model(&mut added, &model, USDC).unwrap();
    assert_eq!(function(&added, 0), "create_interest_model_change");
    assert_eq!(function(&added, 1), "add_interest_model");

    let create = resolved(&added, 0);
    assert_eq!(create.len(), 12);
    assert_eq!(create[0], object(ids.admin_cap_id));
    let fields: Vec<_> = (1..=11).map(pure_u64).collect();
    assert_eq!(create[1..], fields[..]);

    let apply = &added.commands()[1].arguments;
    assert_eq!(apply.len(), 4);
    assert_eq!(apply[2], Argument::Result(0));
    assert_eq!(added.resolve(&apply[3]), Some(&CallArg::Object(CLOCK_OBJECT_ID)));

    let mut updated = ProgrammableTxBlock::new();
    builder().update_interest_model(&mut updated, &model, USDC).unwrap();
    assert_eq!(function(&updated, 1), "update_interest_model");
    let apply = resolved(&updated, 1);
    assert_eq!(apply.len(), 3);
    assert!(!apply.contains(&object(CLOCK_OBJECT_ID)));
    assert_eq!(updated.commands()[1].arguments[2], Argument::Result(0));
}

#[test]
fn change_object_threads_within_a_busy_block() {
    let mut block = ProgrammableTxBlock::new();
    let composer = builder();
    composer.open_obligation(&mut block).unwrap();
    composer.add_risk_model(&mut block, &risk_model(), USDC).unwrap();

    assert_eq!(block.len(), 3);
    assert_eq!(block.commands()[2].arguments[2], Argument::Result(1));
}

#[test]
fn typed_literals_use_their_wire_kind() {
    let ids = ids();
    let whitelisted = Pubkey::new_unique();
    let recipient = Pubkey::new_unique();
    let composer = builder();
    let mut block = ProgrammableTxBlock::new();

    composer.add_whitelist_address(&mut block, whitelisted).unwrap();
    composer.set_base_asset_active_state(&mut block, true, USDC).unwrap();
    composer.set_collateral_active_state(&mut block, false, USDC).unwrap();
    composer.update_borrow_fee_recipient(&mut block, recipient).unwrap();

    let expect = |command: usize, function_name: &str, literal: Vec<u8>| {
        assert_eq!(function(&block, command), function_name);
        assert_eq!(
            resolved(&block, command),
            vec![
                object(ids.admin_cap_id),
                object(ids.market_id),
                Some(CallArg::Pure(literal)),
            ]
        );
    };
    expect(0, "add_whitelist_address", whitelisted.to_bytes().to_vec());
    expect(1, "set_base_asset_active_state", vec![1]);
    expect(2, "set_collateral_active_state", vec![0]);
    expect(3, "update_borrow_fee_recipient", recipient.to_bytes().to_vec());

    assert!(block.commands()[0].type_arguments.is_empty());
    assert_eq!(block.commands()[1].type_arguments, vec![TypeTag::from(USDC)]);
    assert!(block.commands()[3].type_arguments.is_empty());
}

#[test]
fn admin_settings_layouts() {
    let ids = ids();
    let composer = builder();
    let mut block = ProgrammableTxBlock::new();

    composer
        .set_incentive_reward_factor(
            &mut block,
            &IncentiveRewardFactor {
                reward_factor: 3,
                scale: 10,
            },
            USDC,
        )
        .unwrap();
    composer
        .update_borrow_fee(
            &mut block,
            &BorrowFee {
                numerator: 1,
                denominator: 1000,
            },
            USDC,
        )
        .unwrap();
    composer.add_lock_key(&mut block, "0xbeef::lock::Key").unwrap();
    composer.increment_version(&mut block).unwrap();

    assert_eq!(function(&block, 0), "set_incentive_reward_factor");
    assert_eq!(
        resolved(&block, 0),
        vec![object(ids.admin_cap_id), object(ids.market_id), pure_u64(3), pure_u64(10)]
    );

    assert_eq!(function(&block, 1), "update_borrow_fee");
    assert_eq!(
        resolved(&block, 1),
        vec![object(ids.admin_cap_id), object(ids.market_id), pure_u64(1), pure_u64(1000)]
    );

    assert_eq!(function(&block, 2), "add_lock_key");
    assert_eq!(
        resolved(&block, 2),
        vec![object(ids.admin_cap_id), object(ids.obligation_access_store_id)]
    );
    assert_eq!(block.commands()[2].type_arguments, vec![TypeTag::from("0xbeef::lock::Key")]);

    let upgrade = &block.commands()[3];
    assert_eq!(upgrade.target.module, "version");
    assert_eq!(upgrade.target.function, "upgrade");
    assert!(upgrade.type_arguments.is_empty());
    assert_eq!(resolved(&block, 3), vec![object(ids.version_id), object(ids.version_cap_id)]);
}

#[test]
fn single_call_operations_leave_earlier_calls_untouched() {
    let composer = builder();
    let mut block = ProgrammableTxBlock::new();
    composer.add_risk_model(&mut block, &risk_model(), USDC).unwrap();
    let before = block.commands().to_vec();

    composer
        .update_borrow_fee(
            &mut block,
            &BorrowFee {
                numerator: 1,
                denominator: 2,
            },
            USDC,
        )
        .unwrap();
    assert_eq!(block.len(), before.len() + 1);
    assert_eq!(block.commands()[..before.len()], before[..]);

    let before = block.commands().to_vec();
    composer.increment_version(&mut block).unwrap();
    assert_eq!(block.len(), before.len() + 1);
    assert_eq!(block.commands()[..before.len()], before[..]);
}

#[test]
fn opened_obligation_flows_into_collateral_and_return() {
    let ids = ids();
    let composer = builder();
    let coin = Pubkey::new_unique();
    let mut block = ProgrammableTxBlock::new();

    let opened = composer.open_obligation(&mut block).unwrap();
    composer.add_collateral(&mut block, opened, coin, USDC).unwrap();
    composer
        .return_obligation(
            &mut block,
            opened.nested(OBLIGATION_INDEX),
            opened.nested(OBLIGATION_HOT_POTATO_INDEX),
        )
        .unwrap();

    assert_eq!(block.len(), 3);
    assert_eq!(function(&block, 0), "open_obligation");
    assert_eq!(resolved(&block, 0), vec![object(ids.version_id)]);

    let deposit = &block.commands()[1];
    assert_eq!(deposit.target.module, "deposit_collateral");
    assert_eq!(deposit.arguments[1], opened.as_argument());
    assert_eq!(
        resolved(&block, 1),
        vec![object(ids.version_id), None, object(ids.market_id), object(coin)]
    );

    let returned = &block.commands()[2];
    assert_eq!(returned.target.function, "return_obligation");
    assert_eq!(
        returned.arguments[1..],
        [Argument::NestedResult(0, 0), Argument::NestedResult(0, 2)]
    );
}

#[test]
fn supply_appends_clock() {
    let ids = ids();
    let coin = Pubkey::new_unique();
    let mut block = ProgrammableTxBlock::new();
    builder().supply_base_asset(&mut block, coin, USDC).unwrap();

    let call = &block.commands()[0];
    assert_eq!(call.target.module, "mint");
    assert_eq!(call.target.function, "mint_entry");
    assert_eq!(
        resolved(&block, 0),
        vec![
            object(ids.version_id),
            object(ids.market_id),
            object(coin),
            object(CLOCK_OBJECT_ID),
        ]
    );
}

#[test]
fn borrowed_coin_can_be_supplied_in_the_same_block() {
    let composer = builder();
    let mut block = ProgrammableTxBlock::new();
    let opened = composer.open_obligation(&mut block).unwrap();
    let access = ObligationAccess::new(
        opened.nested(OBLIGATION_INDEX),
        opened.nested(OBLIGATION_KEY_INDEX),
        Pubkey::new_unique(),
        Pubkey::new_unique(),
    );

    let borrowed = composer.borrow_base_asset(&mut block, &access, 500, USDC).unwrap();
    composer.supply_base_asset(&mut block, borrowed, USDC).unwrap();

    assert_eq!(block.commands()[2].arguments[2], Argument::Result(1));
}

#[test]
fn handle_from_another_block_is_refused() {
    let composer = builder();
    let mut first = ProgrammableTxBlock::new();
    let opened = composer.open_obligation(&mut first).unwrap();

    let mut second = ProgrammableTxBlock::new();
    let err = composer
        .add_collateral(&mut second, opened, Pubkey::new_unique(), USDC)
        .unwrap_err();
    assert!(err.to_string().contains("ForeignResultHandle"));
    assert!(second.is_empty());
    assert!(second.inputs().is_empty());
}

#[test]
fn change_pair_is_not_split_at_the_command_limit() {
    let composer = builder();
    let mut block = ProgrammableTxBlock::new();
    for _ in 0..MAX_COMMANDS - 1 {
        composer.increment_version(&mut block).unwrap();
    }
    let inputs_before = block.inputs().len();

    let err = composer
        .add_risk_model(&mut block, &risk_model(), USDC)
        .unwrap_err();
    assert!(err.to_string().contains("TooManyCommands"));
    assert!(composer
        .add_interest_model(&mut block, &interest_model(), USDC)
        .is_err());

    assert_eq!(block.len(), MAX_COMMANDS - 1);
    assert_eq!(block.inputs().len(), inputs_before);
    assert_eq!(function(&block, block.len() - 1), "upgrade");

    // A single call still fits in the last slot
    composer.increment_version(&mut block).unwrap();
    assert_eq!(block.len(), MAX_COMMANDS);
}

#[test]
fn change_pair_is_not_split_at_the_input_limit() {
    let mut block = ProgrammableTxBlock::new();
    let filler: Vec<TxArg> = (0..MAX_INPUTS as u64 - 5)
        .map(|n| TxArg::Pure(PureValue::U64(n)))
        .collect();
    block
        .move_call(MoveTarget::new(ids().package_id, "app", "noop"), filler, vec![])
        .unwrap();

    let err = builder()
        .update_risk_model(&mut block, &risk_model(), USDC)
        .unwrap_err();
    assert!(err.to_string().contains("TooManyInputs"));
    assert_eq!(block.len(), 1);
    assert_eq!(block.inputs().len(), MAX_INPUTS - 5);
}

#[test]
fn handle_ahead_of_the_block_is_refused() {
    let composer = builder();
    let mut block = ProgrammableTxBlock::new();
    let ahead = ResultHandle::new(block.id(), 5);

    let err = composer
        .add_collateral(&mut block, ahead, Pubkey::new_unique(), USDC)
        .unwrap_err();
    assert!(err.to_string().contains("UnknownResultHandle"));
    assert!(block.is_empty());
    assert!(block.inputs().is_empty());

    let opened = composer.open_obligation(&mut block).unwrap();
    let next = ResultHandle::new(block.id(), opened.command_index() + 1);
    assert!(composer
        .return_obligation(&mut block, opened.nested(OBLIGATION_INDEX), next)
        .is_err());
    assert_eq!(block.len(), 1);
}

#[test]
fn fixed_ids_are_shared_inputs() {
    let composer = builder();
    let mut block = ProgrammableTxBlock::new();
    composer
        .add_limiter(
            &mut block,
            &OutflowLimiterModel {
                outflow_limit: 1,
                outflow_cycle_duration: 2,
                outflow_segment_duration: 3,
            },
            USDC,
        )
        .unwrap();
    composer.set_base_asset_active_state(&mut block, true, USDC).unwrap();

    // admin + market once, plus three limiter values and one flag
    assert_eq!(block.inputs().len(), 6);
    assert_eq!(block.commands()[0].arguments[..2], block.commands()[1].arguments[..2]);
}

#[test]
fn works_through_a_trait_object() {
    let mut block = ProgrammableTxBlock::new();
    {
        let dyn_block: &mut dyn TransactionBlock = &mut block;
        let literal = dyn_block.pure(PureValue::U64(9));
        assert_eq!(literal, TxArg::Pure(PureValue::U64(9)));
        builder().increment_version(dyn_block).unwrap();
    }
    assert_eq!(block.len(), 1);
}

fn id_strategy() -> impl Strategy<Value = Pubkey> {
    any::<[u8; 32]>().prop_map(Pubkey::new_from_array)
}

proptest! {
    #[test]
    fn withdraw_and_borrow_argument_order(
        version in id_strategy(),
        market in id_strategy(),
        obligation in id_strategy(),
        obligation_key in id_strategy(),
        registry in id_strategy(),
        oracle in id_strategy(),
        amount in any::<u64>(),
    ) {
        let base = ids();
        let composer = ProtocolTxBuilder::new(ProtocolIds {
            version_id: version,
            market_id: market,
            ..base
        });
        let access = ObligationAccess::new(obligation, obligation_key, registry, oracle);

        let mut block = ProgrammableTxBlock::new();
        composer.remove_collateral(&mut block, &access, amount, USDC).unwrap();
        composer.borrow_base_asset(&mut block, &access, amount, USDC).unwrap();

        let expected = vec![
            object(version),
            object(obligation),
            object(obligation_key),
            object(market),
            object(registry),
            pure_u64(amount),
            object(oracle),
            object(CLOCK_OBJECT_ID),
        ];
        prop_assert_eq!(function(&block, 0), "withdraw_collateral");
        prop_assert_eq!(function(&block, 1), "borrow");
        prop_assert_eq!(resolved(&block, 0), expected.clone());
        prop_assert_eq!(resolved(&block, 1), expected);
    }
}
