// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::buffer::{EncodeBuffer, Reader};
use crate::config::Settings;
use crate::resolver::classifier::{classifier, TypeClassifier};

/// State a write routine works against: the target buffer and the encoder's settings.
pub struct WriteContext<'se> {
    pub buffer: &'se mut EncodeBuffer,
    pub settings: &'se Settings,
    pub classifier: &'static TypeClassifier,
}

impl<'se> WriteContext<'se> {
    pub fn new(buffer: &'se mut EncodeBuffer, settings: &'se Settings) -> WriteContext<'se> {
        WriteContext {
            buffer,
            settings,
            classifier: classifier(),
        }
    }
}

pub struct ReadContext<'de> {
    pub reader: Reader<'de>,
    pub settings: &'de Settings,
    pub classifier: &'static TypeClassifier,
}

impl<'de> ReadContext<'de> {
    pub fn new(reader: Reader<'de>, settings: &'de Settings) -> ReadContext<'de> {
        ReadContext {
            reader,
            settings,
            classifier: classifier(),
        }
    }

    #[inline(always)]
    pub fn cursor(&self) -> usize {
        self.reader.cursor()
    }
}
