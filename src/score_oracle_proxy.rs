use multiversx_sc::proxy_imports::*;

/// Identity score oracle (Gitcoin Passport style scorer).
pub struct ScoreOracleProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for ScoreOracleProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = ScoreOracleProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        ScoreOracleProxyMethods { wrapped_tx: tx }
    }
}

pub struct ScoreOracleProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> ScoreOracleProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn get_score<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        user: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getScore")
            .argument(&user)
            .original_result()
    }
}
