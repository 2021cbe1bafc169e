use ::aws_config::meta::region::RegionProviderChain;
use ::aws_config::BehaviorVersion;
use aws_types::region::Region;

/// Load the shared SDK config once; every client is built from it.
///
/// An explicit `region` wins. Otherwise the region comes from the default
/// chain, which reads `profile` when one is given.
pub async fn configure_aws(
    region: Option<String>,
    profile: Option<String>,
) -> aws_types::SdkConfig {
    let mut loader = ::aws_config::defaults(BehaviorVersion::v2024_03_28());

    if let Some(profile) = profile {
        loader = loader.profile_name(profile);
    }

    if let Some(region) = region {
        let region_provider = RegionProviderChain::first_try(Region::new(region));
        loader = loader.region(region_provider);
    }

    loader.load().await
}
