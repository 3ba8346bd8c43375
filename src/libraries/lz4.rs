//! LZ4 compression library, built from its bundled Visual Studio solution.

use crate::core::{ArtifactMapping, BuildSpec, IdeProject, PlatformKey};

pub fn spec() -> BuildSpec {
    BuildSpec::new("lz4", "external/lz4")
        .ide(
            IdeProject::new("visual/VS2017/lz4")
                .project("liblz4")
                .upgrade(true),
        )
        .libs(
            ArtifactMapping::new()
                .map("visual/VS2017/bin/x64_Debug/liblz4_static.lib", "lz4.lib")
                .map("visual/VS2017/bin/x64_Release/liblz4_static.lib", "lz4.lib"),
        )
        .only_on([PlatformKey::Windows])
}
