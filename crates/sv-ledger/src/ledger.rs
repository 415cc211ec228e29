//! Bank ledger operations

use sv_core::{
    BankState, GameConfig, Jackpot, LedgerPool, Player, SettleError, SettleResult, Shop,
    SlotEvent, format_amount,
};

use crate::split::{BetRemainder, RevenueSplit};

/// All money movement for one round.
///
/// Owns the round's player, shop, game and jackpot snapshots. The player's
/// promotional credit is captured at construction: the revenue-split and
/// jackpot-accrual math reads the captured pre-round value even after the
/// balance debit has drawn the live counter down.
#[derive(Debug, Clone)]
pub struct BankLedger {
    player: Player,
    shop: Shop,
    game: GameConfig,
    jackpots: Vec<Jackpot>,
    /// Sticky bonus-context flag for bank-state normalization
    bonus_active: bool,
    /// Suppresses all jackpot growth and contribution for the round
    jackpot_percent_zero: bool,
    /// Promotional credit as of round start, ledger units
    credit_at_start: f64,
    remainder: BetRemainder,
    split: RevenueSplit,
    jack_pay: Option<f64>,
}

impl BankLedger {
    pub fn new(player: Player, shop: Shop, game: GameConfig, jackpots: Vec<Jackpot>) -> Self {
        let credit_at_start = player.bonus_credit;
        Self {
            player,
            shop,
            game,
            jackpots,
            bonus_active: false,
            jackpot_percent_zero: false,
            credit_at_start,
            remainder: BetRemainder::default(),
            split: RevenueSplit::default(),
            jack_pay: None,
        }
    }

    /// Mark the whole round as running in a bonus context, forcing every
    /// bank movement onto the bonus pool.
    pub fn set_bonus_active(&mut self, active: bool) {
        self.bonus_active = active;
    }

    /// Enable the jackpot-zero-percent mode for this round.
    pub fn set_jackpot_percent_zero(&mut self, zero: bool) {
        self.jackpot_percent_zero = zero;
    }

    // ------------------------------------------------------------------
    // Read accessors
    // ------------------------------------------------------------------

    /// Player balance in display units.
    pub fn balance(&self) -> f64 {
        self.player.balance / self.game.denomination
    }

    /// Bank pool value for `state` in display units, folded through the
    /// round's bonus flag.
    pub fn bank(&self, state: BankState) -> f64 {
        let state = self.normalized(state);
        self.game.bank(state) / self.game.denomination
    }

    /// Shop revenue-share percent.
    pub fn percent(&self) -> f64 {
        self.shop.percent
    }

    /// Live promotional credit of the player.
    pub fn bonus_credit(&self) -> f64 {
        self.player.bonus_credit
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn game(&self) -> &GameConfig {
        &self.game
    }

    pub fn shop(&self) -> &Shop {
        &self.shop
    }

    pub fn jackpots(&self) -> &[Jackpot] {
        &self.jackpots
    }

    /// Revenue split recorded by the last bet credit.
    pub fn split(&self) -> &RevenueSplit {
        &self.split
    }

    /// Jackpot amount paid out this round, if any (2-decimal).
    pub fn jack_pay(&self) -> Option<f64> {
        self.jack_pay
    }

    /// Transient remainder state, for same-round reconciliation.
    pub fn remainder(&self) -> &BetRemainder {
        &self.remainder
    }

    /// Tear the ledger apart into its mutated snapshot pieces.
    pub fn into_parts(self) -> (Player, Shop, GameConfig, Vec<Jackpot>, RevenueSplit, Option<f64>) {
        (
            self.player,
            self.shop,
            self.game,
            self.jackpots,
            self.split,
            self.jack_pay,
        )
    }

    fn normalized(&self, state: BankState) -> BankState {
        if self.bonus_active {
            BankState::Bonus
        } else {
            state
        }
    }

    /// Log-only anomaly report; never aborts the round.
    fn silent_warning(&self, code: impl std::fmt::Display) {
        log::warn!("silent ledger warning: {code}");
    }

    // ------------------------------------------------------------------
    // Balance
    // ------------------------------------------------------------------

    /// Apply `delta` (display units) to the player balance.
    ///
    /// Bet debits draw promotional funds first: with no promotional credit
    /// the whole debit is tested against the reserve and any excess becomes
    /// `bet_remains`; with partial credit the shortfall is tested against
    /// the reserve and any excess becomes `bet_remains0`. The reserve never
    /// drops below zero. Real balance always moves by the full delta; the
    /// promotional pools are a secondary ledger layered on top of it.
    pub fn set_balance(&mut self, delta: f64, event: SlotEvent) -> SettleResult<f64> {
        let current = self.balance();
        if current + delta < 0.0 {
            return Err(SettleError::InvariantViolation {
                pool: LedgerPool::Balance,
                delta,
                current,
                state: String::new(),
                would_be: current + delta,
            });
        }

        let scaled = delta * self.game.denomination;
        if scaled < 0.0 && event == SlotEvent::Bet {
            let debit = scaled.abs();

            if self.player.bonus_credit == 0.0 {
                let mut remains = 0.0;
                if self.player.bonus_reserve > 0.0 && self.player.bonus_reserve < debit {
                    remains = debit - self.player.bonus_reserve;
                }
                self.remainder.bet_remains = Some(remains);

                if self.player.bonus_reserve > 0.0 {
                    if self.player.bonus_reserve < debit {
                        self.player.bonus_reserve = 0.0;
                    } else {
                        self.player.bonus_reserve -= debit;
                    }
                }
            } else if self.player.bonus_credit > 0.0 && self.player.bonus_credit < debit {
                let shortfall = debit - self.player.bonus_credit;
                let mut remains0 = shortfall;
                if self.player.bonus_reserve > 0.0 {
                    remains0 = if self.player.bonus_reserve < shortfall {
                        shortfall - self.player.bonus_reserve
                    } else {
                        0.0
                    };
                }
                self.remainder.bet_remains0 = Some(remains0);

                if self.player.bonus_reserve > 0.0 {
                    if self.player.bonus_reserve < shortfall {
                        self.player.bonus_reserve = 0.0;
                    } else {
                        self.player.bonus_reserve -= shortfall;
                    }
                }
            }

            // The promotional counter always moves by the full scaled delta,
            // off the captured pre-round value.
            self.player.bonus_credit = format_amount(self.credit_at_start + scaled);
        }

        self.player.balance = format_amount(self.player.balance + scaled);
        Ok(self.balance())
    }

    // ------------------------------------------------------------------
    // Bank
    // ------------------------------------------------------------------

    /// Credit `sum` (display units) to the bank pool for `state`.
    ///
    /// Bet credits back out the pre-split gross bet from the shop percent,
    /// split it between the promotional-covered and uncovered portions,
    /// carve the bonus-wallet slice off for the bonus bank, accumulate the
    /// per-jackpot contribution shares and record the operator profit. A
    /// pending `bet_remains` from the balance step substitutes for a zero
    /// sum so the real-money part of a promotional bet still reaches the
    /// bank.
    pub fn set_bank(&mut self, state: BankState, sum: f64, event: SlotEvent) -> SettleResult<f64> {
        let state = BankState::normalize(state, event, self.bonus_active);
        let current = self.game.bank(state) / self.game.denomination;
        if current + sum < 0.0 {
            return Err(SettleError::InvariantViolation {
                pool: LedgerPool::Bank,
                delta: sum,
                current,
                state: state.label().to_string(),
                would_be: current + sum,
            });
        }

        let mut scaled = sum * self.game.denomination;
        let mut bonus_wallet_sum = 0.0;

        if scaled > 0.0 && event == SlotEvent::Bet {
            self.split = RevenueSplit::default();

            let percent = self.shop.percent;
            let bonus_points = self.shop.bonus_wallet_points();
            let credit = self.credit_at_start;
            let gross_bet = scaled / percent * 100.0;

            if credit > 0.0 && credit < gross_bet {
                // Covered first portion at the full split, uncovered second
                // portion banked whole, reconciled with the balance step.
                let covered = credit;
                let mut uncovered = gross_bet - covered;
                if let Some(remains0) = self.remainder.bet_remains0 {
                    uncovered = remains0;
                }
                scaled = covered / 100.0 * percent + uncovered;
                bonus_wallet_sum = covered / 100.0 * bonus_points;
            } else {
                bonus_wallet_sum = gross_bet / 100.0 * bonus_points;
            }

            if !self.jackpot_percent_zero {
                for jackpot in &self.jackpots {
                    if credit > 0.0 && credit < gross_bet {
                        self.split.to_jackpot_banks += credit / 100.0 * jackpot.percent;
                    } else if credit > 0.0 {
                        self.split.to_jackpot_banks += gross_bet / 100.0 * jackpot.percent;
                    }
                }
            }

            self.split.to_game_banks = scaled;
            self.split.bet_profit =
                gross_bet - self.split.to_game_banks - self.split.to_jackpot_banks;
        }

        if scaled > 0.0 {
            self.split.to_game_banks = scaled;
        }

        if bonus_wallet_sum > 0.0 {
            scaled -= bonus_wallet_sum;
            self.split.to_bonus_wallet = bonus_wallet_sum;
            self.game.add_to_bank(BankState::Bonus, bonus_wallet_sum);
        }

        if scaled == 0.0 && event == SlotEvent::Bet {
            if let Some(remains) = self.remainder.bet_remains {
                scaled = remains;
            }
        }

        self.game.add_to_bank(state, scaled);
        self.game.main_bank = format_amount(self.game.main_bank);
        self.game.bonus_bank = format_amount(self.game.bonus_bank);
        Ok(self.bank(state))
    }

    // ------------------------------------------------------------------
    // Jackpots
    // ------------------------------------------------------------------

    /// Accrue, pay out and refill every jackpot pool for a bet of `bet`
    /// display units, in slot order. Returns the paid amount when a pool
    /// fired.
    ///
    /// Growth is keyed off the captured promotional credit: none (or the
    /// zero-percent mode) means the pool floats at its prior balance,
    /// partial credit grows the pool off the credit amount, full coverage
    /// off the whole bet. A pool pays out at most once per round, only when
    /// its configured payout amount is positive, below the proposed balance
    /// and not reserved for another player.
    pub fn update_jackpots(&mut self, bet: f64) -> SettleResult<Option<f64>> {
        if self.jackpots.is_empty() {
            return Ok(None);
        }

        let bet = bet * self.game.denomination;
        let credit = self.credit_at_start;
        let denomination = self.game.denomination;
        let mut pay_jack = 0.0;

        for index in 0..self.jackpots.len() {
            let jackpot = self.jackpots[index].clone();

            let mut proposed = if credit <= 0.0 || self.jackpot_percent_zero {
                jackpot.balance
            } else if credit < bet {
                credit / 100.0 * jackpot.percent + jackpot.balance
            } else {
                bet / 100.0 * jackpot.percent + jackpot.balance
            };

            if jackpot.pay_sum < proposed && jackpot.pay_sum > 0.0 {
                if !jackpot.payable_to(self.player.id) {
                    self.silent_warning(format!(
                        "jackpot {} reserved for player {:?}, not paying player {}",
                        jackpot.id, jackpot.owner_user_id, self.player.id
                    ));
                } else {
                    pay_jack = jackpot.pay_sum / denomination;
                    proposed -= jackpot.pay_sum;
                    self.set_balance(pay_jack, SlotEvent::Jackpot)?;
                }
            }

            let pool = &mut self.jackpots[index];
            pool.balance = format_amount(proposed);
            if pool.balance < pool.min_balance() && pool.start_balance > 0.0 {
                pool.balance = format_amount(pool.balance + pool.start_balance);
            }
        }

        if pay_jack > 0.0 {
            let paid = (pay_jack * 100.0).round() / 100.0;
            self.jack_pay = Some(paid);
            return Ok(Some(paid));
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ledger_with(player: Player, shop: Shop, game: GameConfig) -> BankLedger {
        BankLedger::new(player, shop, game, Vec::new())
    }

    fn plain_player(balance: f64) -> Player {
        Player {
            id: 1,
            balance,
            ..Default::default()
        }
    }

    #[test]
    fn test_balance_invariant_rejected_and_state_unchanged() {
        let mut ledger = ledger_with(plain_player(10.0), Shop::default(), GameConfig::default());
        let err = ledger.set_balance(-15.0, SlotEvent::Bet).unwrap_err();
        assert!(matches!(
            err,
            SettleError::InvariantViolation {
                pool: LedgerPool::Balance,
                ..
            }
        ));
        assert_eq!(ledger.balance(), 10.0);
        assert_eq!(ledger.bonus_credit(), 0.0);
        assert_eq!(*ledger.remainder(), BetRemainder::default());
    }

    #[test]
    fn test_bank_invariant_rejected_and_state_unchanged() {
        let game = GameConfig {
            main_bank: 5.0,
            ..Default::default()
        };
        let mut ledger = ledger_with(plain_player(0.0), Shop::default(), game);
        let err = ledger
            .set_bank(BankState::Main, -10.0, SlotEvent::Bet)
            .unwrap_err();
        assert!(matches!(
            err,
            SettleError::InvariantViolation {
                pool: LedgerPool::Bank,
                ..
            }
        ));
        assert_eq!(ledger.bank(BankState::Main), 5.0);
    }

    #[test]
    fn test_promotional_precedence_reserve_only() {
        // bonus_reserve = 10, bonus_credit = 0, debit -15:
        // reserve drains to 0 and the uncovered 5 becomes bet_remains.
        let player = Player {
            id: 1,
            balance: 100.0,
            bonus_reserve: 10.0,
            ..Default::default()
        };
        let mut ledger = ledger_with(player, Shop::default(), GameConfig::default());
        ledger.set_balance(-15.0, SlotEvent::Bet).unwrap();

        assert_eq!(ledger.player().bonus_reserve, 0.0);
        assert_eq!(ledger.remainder().bet_remains, Some(5.0));
        assert_eq!(ledger.balance(), 85.0);
    }

    #[test]
    fn test_partial_credit_shortfall_against_reserve() {
        let player = Player {
            id: 1,
            balance: 100.0,
            bonus_credit: 5.0,
            bonus_reserve: 100.0,
            ..Default::default()
        };
        let mut ledger = ledger_with(player, Shop::default(), GameConfig::default());
        ledger.set_balance(-20.0, SlotEvent::Bet).unwrap();

        // Shortfall of 15 fully absorbed by the reserve
        assert_eq!(ledger.player().bonus_reserve, 85.0);
        assert_eq!(ledger.remainder().bet_remains0, Some(0.0));
        assert_eq!(ledger.balance(), 80.0);
    }

    #[test]
    fn test_partial_credit_with_insufficient_reserve() {
        let player = Player {
            id: 1,
            balance: 100.0,
            bonus_credit: 5.0,
            bonus_reserve: 4.0,
            ..Default::default()
        };
        let mut ledger = ledger_with(player, Shop::default(), GameConfig::default());
        ledger.set_balance(-20.0, SlotEvent::Bet).unwrap();

        // Shortfall 15, reserve covers 4, uncovered 11
        assert_eq!(ledger.player().bonus_reserve, 0.0);
        assert_eq!(ledger.remainder().bet_remains0, Some(11.0));
    }

    #[test]
    fn test_promotional_counter_moves_by_full_debit() {
        // Observed source behavior: the promotional counter always moves by
        // the full debit off its pre-round value, even past zero.
        let player = Player {
            id: 1,
            balance: 100.0,
            bonus_credit: 5.0,
            ..Default::default()
        };
        let mut ledger = ledger_with(player, Shop::default(), GameConfig::default());
        ledger.set_balance(-20.0, SlotEvent::Bet).unwrap();
        assert_eq!(ledger.bonus_credit(), -15.0);
    }

    #[test]
    fn test_non_bet_debit_leaves_promotional_pools_alone() {
        let player = Player {
            id: 1,
            balance: 100.0,
            bonus_credit: 5.0,
            bonus_reserve: 10.0,
            ..Default::default()
        };
        let mut ledger = ledger_with(player, Shop::default(), GameConfig::default());
        ledger.set_balance(-20.0, SlotEvent::Gamble).unwrap();
        assert_eq!(ledger.bonus_credit(), 5.0);
        assert_eq!(ledger.player().bonus_reserve, 10.0);
        assert_eq!(ledger.balance(), 80.0);
    }

    #[test]
    fn test_end_to_end_bet_split() {
        // percent 90, bet 1.0: balance -1, house 0.9 of which 0.1 funds the
        // bonus wallet and 0.8 lands in the main bank.
        let mut ledger = ledger_with(plain_player(1000.0), Shop::default(), GameConfig::default());

        let balance = ledger.set_balance(-1.0, SlotEvent::Bet).unwrap();
        assert_eq!(balance, 999.0);

        ledger.set_bank(BankState::Main, 0.9, SlotEvent::Bet).unwrap();
        assert_relative_eq!(ledger.game().main_bank, 0.8, epsilon = 1e-9);
        assert_relative_eq!(ledger.game().bonus_bank, 0.1, epsilon = 1e-9);
    }

    #[test]
    fn test_no_bonus_wallet_slice_for_low_percent_shops() {
        let shop = Shop {
            percent: 10.0,
            ..Default::default()
        };
        let mut ledger = ledger_with(plain_player(1000.0), shop, GameConfig::default());
        ledger.set_balance(-1.0, SlotEvent::Bet).unwrap();
        ledger.set_bank(BankState::Main, 0.1, SlotEvent::Bet).unwrap();
        assert_relative_eq!(ledger.game().main_bank, 0.1, epsilon = 1e-9);
        assert_eq!(ledger.game().bonus_bank, 0.0);
    }

    #[test]
    fn test_conservation_with_full_promotional_coverage() {
        let player = Player {
            id: 1,
            balance: 100.0,
            bonus_credit: 50.0,
            ..Default::default()
        };
        let shop = Shop::default(); // percent 90
        let jackpots = vec![
            Jackpot {
                percent: 1.0,
                ..Default::default()
            },
            Jackpot {
                percent: 0.5,
                ..Default::default()
            },
        ];
        let mut ledger = BankLedger::new(player, shop, GameConfig::default(), jackpots);

        let bet = 10.0;
        ledger.set_balance(-bet, SlotEvent::Bet).unwrap();
        ledger
            .set_bank(BankState::Main, bet * 0.9, SlotEvent::Bet)
            .unwrap();

        let split = ledger.split();
        let gross = bet; // sum / percent * 100
        let house = split.to_game_banks - split.to_bonus_wallet;
        assert_relative_eq!(
            house + split.to_bonus_wallet + split.to_jackpot_banks + split.bet_profit,
            gross,
            epsilon = 1e-9
        );
        assert_relative_eq!(split.to_jackpot_banks, gross / 100.0 * 1.5, epsilon = 1e-9);
    }

    #[test]
    fn test_conservation_with_partial_promotional_coverage() {
        let player = Player {
            id: 1,
            balance: 100.0,
            bonus_credit: 4.0,
            ..Default::default()
        };
        let jackpots = vec![Jackpot {
            percent: 2.0,
            ..Default::default()
        }];
        let mut ledger = BankLedger::new(player, Shop::default(), GameConfig::default(), jackpots);

        let bet = 10.0;
        ledger.set_balance(-bet, SlotEvent::Bet).unwrap();
        ledger
            .set_bank(BankState::Main, bet * 0.9, SlotEvent::Bet)
            .unwrap();

        let split = ledger.split();
        let house = split.to_game_banks - split.to_bonus_wallet;
        assert_relative_eq!(
            house + split.to_bonus_wallet + split.to_jackpot_banks + split.bet_profit,
            10.0,
            epsilon = 1e-9
        );
        // Covered portion 4.0 at the full split, uncovered 6.0 banked whole
        assert_relative_eq!(split.to_game_banks, 4.0 * 0.9 + 6.0, epsilon = 1e-9);
        assert_relative_eq!(split.to_jackpot_banks, 4.0 / 100.0 * 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_precedence_asymmetry_between_ledger_steps() {
        // The balance step settles the shortfall from the reserve, while the
        // bank step still splits against the pre-round promotional credit.
        // Deliberately asymmetric; preserved from the observed system.
        let player = Player {
            id: 1,
            balance: 100.0,
            bonus_credit: 5.0,
            bonus_reserve: 100.0,
            ..Default::default()
        };
        let mut ledger = ledger_with(player, Shop::default(), GameConfig::default());

        ledger.set_balance(-20.0, SlotEvent::Bet).unwrap();
        assert_eq!(ledger.remainder().bet_remains0, Some(0.0));

        ledger
            .set_bank(BankState::Main, 18.0, SlotEvent::Bet)
            .unwrap();
        // Covered 5 at 90% plus the reconciled uncovered remainder of 0
        assert_relative_eq!(ledger.split().to_game_banks, 4.5, epsilon = 1e-9);
    }

    #[test]
    fn test_pending_remains_substitutes_for_zero_sum() {
        let player = Player {
            id: 1,
            balance: 100.0,
            bonus_reserve: 10.0,
            ..Default::default()
        };
        let mut ledger = ledger_with(player, Shop::default(), GameConfig::default());

        ledger.set_balance(-15.0, SlotEvent::Bet).unwrap();
        assert_eq!(ledger.remainder().bet_remains, Some(5.0));

        // Promotional round banks nothing directly; the real-money part of
        // the bet still reaches the main bank.
        ledger.set_bank(BankState::Main, 0.0, SlotEvent::Bet).unwrap();
        assert_eq!(ledger.game().main_bank, 5.0);
    }

    #[test]
    fn test_bonus_context_routes_to_bonus_bank() {
        let mut ledger = ledger_with(plain_player(100.0), Shop::default(), GameConfig::default());
        ledger
            .set_bank(BankState::Main, 3.0, SlotEvent::FreeSpin)
            .unwrap();
        assert_eq!(ledger.game().bonus_bank, 3.0);
        assert_eq!(ledger.game().main_bank, 0.0);

        ledger.set_bonus_active(true);
        ledger
            .set_bank(BankState::Main, 2.0, SlotEvent::Bet)
            .unwrap();
        assert_eq!(ledger.game().bonus_bank, 5.0);
        assert_eq!(ledger.game().main_bank, 0.0);
    }

    // ------------------------------------------------------------------
    // Jackpots
    // ------------------------------------------------------------------

    fn promo_player(balance: f64, credit: f64) -> Player {
        Player {
            id: 1,
            balance,
            bonus_credit: credit,
            ..Default::default()
        }
    }

    #[test]
    fn test_jackpot_accrues_from_full_bet() {
        let jackpots = vec![Jackpot {
            balance: 100.0,
            percent: 2.0,
            start_balance: 0.0,
            ..Default::default()
        }];
        let mut ledger =
            BankLedger::new(promo_player(100.0, 50.0), Shop::default(), GameConfig::default(), jackpots);
        ledger.update_jackpots(10.0).unwrap();
        assert_relative_eq!(ledger.jackpots()[0].balance, 100.2, epsilon = 1e-9);
    }

    #[test]
    fn test_jackpot_flat_without_promotional_credit() {
        let jackpots = vec![Jackpot {
            balance: 100.0,
            percent: 2.0,
            start_balance: 0.0,
            ..Default::default()
        }];
        let mut ledger =
            BankLedger::new(plain_player(100.0), Shop::default(), GameConfig::default(), jackpots);
        ledger.update_jackpots(10.0).unwrap();
        assert_eq!(ledger.jackpots()[0].balance, 100.0);
    }

    #[test]
    fn test_jackpot_zero_percent_mode_freezes_growth() {
        let jackpots = vec![Jackpot {
            balance: 100.0,
            percent: 2.0,
            start_balance: 0.0,
            ..Default::default()
        }];
        let mut ledger =
            BankLedger::new(promo_player(100.0, 50.0), Shop::default(), GameConfig::default(), jackpots);
        ledger.set_jackpot_percent_zero(true);
        ledger.update_jackpots(10.0).unwrap();
        assert_eq!(ledger.jackpots()[0].balance, 100.0);
    }

    #[test]
    fn test_jackpot_payout_credits_player_and_resets_pool() {
        let jackpots = vec![Jackpot {
            balance: 500.0,
            percent: 1.0,
            pay_sum: 400.0,
            start_balance: 100.0,
            ..Default::default()
        }];
        let mut ledger =
            BankLedger::new(plain_player(50.0), Shop::default(), GameConfig::default(), jackpots);

        let paid = ledger.update_jackpots(1.0).unwrap();
        assert_eq!(paid, Some(400.0));
        assert_eq!(ledger.jack_pay(), Some(400.0));
        assert_eq!(ledger.balance(), 450.0);
        assert_eq!(ledger.jackpots()[0].balance, 100.0);
    }

    #[test]
    fn test_jackpot_owner_exclusivity() {
        let jackpots = vec![Jackpot {
            balance: 500.0,
            percent: 1.0,
            pay_sum: 400.0,
            owner_user_id: Some(99),
            ..Default::default()
        }];
        let mut ledger =
            BankLedger::new(plain_player(50.0), Shop::default(), GameConfig::default(), jackpots);

        let paid = ledger.update_jackpots(1.0).unwrap();
        assert_eq!(paid, None);
        assert_eq!(ledger.balance(), 50.0);
        assert_eq!(ledger.jackpots()[0].balance, 500.0);
    }

    #[test]
    fn test_jackpot_owner_match_pays() {
        let jackpots = vec![Jackpot {
            balance: 500.0,
            percent: 1.0,
            pay_sum: 400.0,
            owner_user_id: Some(1),
            start_balance: 0.0,
            ..Default::default()
        }];
        let mut ledger =
            BankLedger::new(plain_player(50.0), Shop::default(), GameConfig::default(), jackpots);

        assert_eq!(ledger.update_jackpots(1.0).unwrap(), Some(400.0));
        assert_eq!(ledger.balance(), 450.0);
    }

    #[test]
    fn test_jackpot_refill_below_minimum() {
        // Pool at 400 after payout would be below start_balance * 0.5
        let jackpots = vec![Jackpot {
            balance: 500.0,
            percent: 1.0,
            pay_sum: 450.0,
            start_balance: 1000.0,
            ..Default::default()
        }];
        let mut ledger =
            BankLedger::new(plain_player(50.0), Shop::default(), GameConfig::default(), jackpots);

        ledger.update_jackpots(1.0).unwrap();
        // 500 - 450 = 50, below min 500, refilled by 1000
        assert_eq!(ledger.jackpots()[0].balance, 1050.0);
    }

    #[test]
    fn test_jackpot_zero_pay_sum_never_fires() {
        let jackpots = vec![Jackpot {
            balance: 500.0,
            percent: 1.0,
            pay_sum: 0.0,
            start_balance: 0.0,
            ..Default::default()
        }];
        let mut ledger =
            BankLedger::new(plain_player(50.0), Shop::default(), GameConfig::default(), jackpots);
        assert_eq!(ledger.update_jackpots(1.0).unwrap(), None);
        assert_eq!(ledger.balance(), 50.0);
    }

    #[test]
    fn test_no_jackpots_is_noop() {
        let mut ledger = ledger_with(plain_player(50.0), Shop::default(), GameConfig::default());
        assert_eq!(ledger.update_jackpots(5.0).unwrap(), None);
    }

    #[test]
    fn test_denomination_scales_ledger_units() {
        let game = GameConfig {
            denomination: 100.0,
            ..Default::default()
        };
        let mut ledger = ledger_with(plain_player(10_000.0), Shop::default(), game);
        // 10_000 ledger units at denomination 100 = 100 display units
        assert_eq!(ledger.balance(), 100.0);
        ledger.set_balance(-1.0, SlotEvent::Bet).unwrap();
        assert_eq!(ledger.player().balance, 9_900.0);
        assert_eq!(ledger.balance(), 99.0);
    }
}
