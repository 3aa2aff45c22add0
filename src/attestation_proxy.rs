use multiversx_sc::proxy_imports::*;

pub struct AttestationIssuerProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for AttestationIssuerProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = AttestationIssuerProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        AttestationIssuerProxyMethods { wrapped_tx: tx }
    }
}

pub struct AttestationIssuerProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> AttestationIssuerProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    /// Issues a membership attestation and returns its id.
    pub fn attest<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg2: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg3: ProxyArg<bool>,
    >(
        self,
        recipient: Arg0,
        project_name: Arg1,
        metadata_hash: Arg2,
        is_verified: Arg3,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("attest")
            .argument(&recipient)
            .argument(&project_name)
            .argument(&metadata_hash)
            .argument(&is_verified)
            .original_result()
    }
}
