/*!
# Graph Algorithms

Graph-level building blocks the property solvers are assembled from: depth-first traversal,
connectivity and vertex-induced subgraphs. All algorithms are re-exported, so you can simply do:
```rust
use uprops::algo::*;
```
*/

mod connectivity;
mod subgraph;
mod traversal;

use crate::{error::*, prelude::*};

pub use connectivity::*;
pub use subgraph::*;
pub use traversal::*;
